//! All model prompt constants for the survey workflows, plus the builders
//! that fill their placeholders.
//!
//! The texts are the service's production Korean prompts. Answer lists are
//! embedded as pretty-printed JSON with the original Unicode intact;
//! `serde_json` never escapes non-ASCII, so the model sees the answers
//! exactly as the traveler wrote them.

use crate::models::mbti::TraitRow;

/// Fixed prompt for `/generate_question`: five multiple-choice questions,
/// four options each, in the declared JSON shape.
pub const QUESTION_PROMPT: &str = r#"여행자 성향을 분석하기 위한 객관식 질문을 5개 만들어 주세요.
- 질문은 활동, 예산, 동행 여부, 여행 스타일 등을 다양하게 포함해 주세요.
- 각 질문에는 4개의 선택지를 포함해 주세요.
- 아래 JSON 형식으로 응답해 주세요:

{
  "questions": [
    {
      "question": "질문1",
      "options": ["선택지1", "선택지2", "선택지3", "선택지4"]
    }
  ]
}"#;

/// The sixteen survey categories. Embedded verbatim into the classification
/// prompt; the store and taxonomy file carry the same codes.
pub const TRAIT_CATALOG: &str = r#"A1: 조용한 자연파
A2: 도시 탐험가
A3: 문화 체험가
A4: 모험가
A5: 미식가
A6: 힐링 여행자
A7: 즉흥 여행가
A8: 역사 탐험가
B1: 혼자 여행 선호자
B2: 단체 여행 선호자
B3: 가족 중심 여행자
B4: 사진 애호가
B5: 경제형 여행자
B6: 럭셔리 여행자
B7: 활동가형 여행자
B8: 자유 방랑형"#;

/// `/analyze` template. Replace `{answers_json}` and `{trait_catalog}`.
const CLASSIFY_PROMPT_TEMPLATE: &str = r#"다음은 사용자의 객관식 설문 응답입니다:

{answers_json}

위 응답을 참고하여 16가지 성향 중 하나로 분류해주세요.

응답은 아래 JSON 형식으로 제공해주세요:
{
  "type": "A1",
  "name": "조용한 자연파",
  "description": "설명",
  "recommended_places": ["추천지1", "추천지2", "추천지3"]
}

성향 목록:
{trait_catalog}"#;

/// MBTI-prediction template, the opening step of the RAG and full
/// recommendation workflows. Replace `{answers_json}`.
const MBTI_PROMPT_TEMPLATE: &str = r#"다음은 여행자 객관식 설문 응답입니다:

{answers_json}

이 여행자의 MBTI 유형을 예측해주세요. 응답 형식은 JSON으로:
{
  "mbti": "ENFP"
}"#;

/// Emotional recommendation template for `/rag_recommend`. Free-text reply,
/// returned to the client verbatim. Replace `{mbti_type}` and `{description}`.
const EMOTIONAL_PROMPT_TEMPLATE: &str = r#"당신은 여행 성향 추천 전문가입니다.

MBTI 유형: {mbti_type}
설명: {description}

이 사용자에게 감성적이고 친근한 여행 추천 메시지를 작성해주세요."#;

/// Descriptive-analysis template for `/analyze_and_recommend`. Same inputs
/// as the emotional template but a different register: three to five
/// sentences, information-centric, explicitly steering away from emotional
/// language.
const ANALYSIS_PROMPT_TEMPLATE: &str = r#"당신은 여행 심리 전문가입니다.

MBTI 유형과 해당 설명을 보고, 이 유형의 여행 성향, 특징, 선호하는 여행 방식에 대해 요약된 분석 내용을 작성해주세요.

MBTI 유형: {mbti_type}
설명: {description}

요청사항:
- 문장 형식으로 3~5문장 정도
- 해당 MBTI 유형이 어떤 여행 스타일을 좋아하고 어떤 방식으로 여행을 즐기는지를 알려주세요
- 너무 딱딱하지 않지만, 정보 중심으로 설명해주세요
- 감성적 표현은 피하고, 분석/설명 중심으로 작성해주세요

예시 형식:
"ENFP 유형은 즉흥적인 여행을 선호하며, 낯선 장소에서도 빠르게 적응합니다. 여행 중 다양한 사람들과 교류하는 것을 즐기며, 계획보다는 분위기를 따라 움직이는 경우가 많습니다."

이제 작성해주세요:"#;

/// Tag-selection template, shared by `/recommend_tags` and
/// `/analyze_and_recommend`. Replace `{answers_json}` and `{tags_json}`.
const TAG_PROMPT_TEMPLATE: &str = r##"당신은 여행 해시태그 추천 전문가입니다.

사용자의 여행 성향을 다음 답변에서 유추해보세요:

{answers_json}

아래 50개의 국내 여행 해시태그 중에서 이 사용자에게 어울리는 10개를 골라주세요:

{tags_json}

응답은 다음 형식으로 해주세요:
{
  "tags": ["#힐링여행", "#계획없이떠나기", "#감성사진", ...]
}"##;

/// Region-shortlist template for `/analyze_and_recommend`: exactly three
/// Korean city names on one comma-separated line, no prose. Replace
/// `{mbti_type}` and `{description}`.
const REGION_PROMPT_TEMPLATE: &str = r#"아래는 {mbti_type} 유형의 여행 성향 설명입니다:

"{description}"

이 유형에게 어울리는 대한민국 국내 도시(시 단위)를 3곳 추천해주세요.
조건:
- 한국의 시 단위 도시 이름만 콤마(,)로 구분해서 반환해주세요.
- 예시: 서울, 부산, 강릉
- 설명은 필요 없습니다."#;

pub fn classify_prompt(answers: &[String]) -> String {
    CLASSIFY_PROMPT_TEMPLATE
        .replace("{answers_json}", &answers_json(answers))
        .replace("{trait_catalog}", TRAIT_CATALOG)
}

pub fn mbti_prompt(answers: &[String]) -> String {
    MBTI_PROMPT_TEMPLATE.replace("{answers_json}", &answers_json(answers))
}

pub fn emotional_prompt(trait_row: &TraitRow) -> String {
    EMOTIONAL_PROMPT_TEMPLATE
        .replace("{mbti_type}", &trait_row.mbti_type)
        .replace("{description}", &trait_row.description)
}

pub fn analysis_prompt(trait_row: &TraitRow) -> String {
    ANALYSIS_PROMPT_TEMPLATE
        .replace("{mbti_type}", &trait_row.mbti_type)
        .replace("{description}", &trait_row.description)
}

pub fn tag_prompt(answers: &[String], vocabulary: &[String]) -> String {
    TAG_PROMPT_TEMPLATE
        .replace("{answers_json}", &answers_json(answers))
        .replace("{tags_json}", &answers_json(vocabulary))
}

pub fn region_prompt(trait_row: &TraitRow) -> String {
    REGION_PROMPT_TEMPLATE
        .replace("{mbti_type}", &trait_row.mbti_type)
        .replace("{description}", &trait_row.description)
}

/// Pretty-printed JSON array of strings, non-ASCII untouched.
fn answers_json(values: &[String]) -> String {
    serde_json::to_string_pretty(values).unwrap_or_default()
}
