use serde::{Deserialize, Serialize};

/// A named input string the lab can load with one key press
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    pub name: String,
    pub text: String,
}

impl Sample {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

pub fn builtin_samples() -> Vec<Sample> {
    vec![
        Sample::new("Long runs", "AAAAAABBBBBBCCCCCCDDDDDDEEEEEEAAAAAA"),
        Sample::new(
            "Repeated phrase",
            "the cat sat on the mat, the cat sat on the hat",
        ),
        Sample::new("Skewed letters", "abracadabra alakazam"),
        Sample::new("No repeats", "abcdefghijklmnopqrstuvwxyz"),
        Sample::new("Multibyte", "ねこねこねこ🐈🐈🐈"),
    ]
}
