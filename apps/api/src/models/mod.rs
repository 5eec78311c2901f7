pub mod mbti;
