#[derive(Debug, Default, PartialEq, Eq)]
pub struct Flags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub board: bool,
    pub easy: bool,
    pub no_upper: bool,
    pub no_lower: bool,
    pub no_digits: bool,
    pub no_special: bool,
    pub show_history: bool,
    pub length: Option<usize>,
    pub number: Option<usize>,
}
