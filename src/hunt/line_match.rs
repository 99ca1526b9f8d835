pub struct LineMatch {
    pub line_number: u64,
    pub text: String,
    /// Indices into the rule table, in rule order.
    pub hits: Vec<usize>,
}

impl LineMatch {
    pub fn new(line_number: u64, text: String, hits: Vec<usize>) -> Self {
        Self {
            line_number,
            text,
            hits,
        }
    }
}
