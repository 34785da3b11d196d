/// One dictionary row: the key sequence that types `word`, and the word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct T9Entry {
    pub seq: &'static str,
    pub word: &'static str,
}

impl T9Entry {
    pub const fn new(seq: &'static str, word: &'static str) -> Self {
        Self { seq, word }
    }
}
