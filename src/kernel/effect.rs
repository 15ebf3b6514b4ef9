/// Side effects a dispatch may request from the host shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    SetClipboardText(String),
}
