#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CostMsg {
    NextField,
    PreviousField,
    Increase,
    Decrease,
}
