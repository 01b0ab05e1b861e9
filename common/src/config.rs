use crate::network::PresentationOptions;

pub struct Config {
    /// How addresses are rendered in command output.
    pub options: PresentationOptions,

    /// Quiet level.
    ///
    /// Anything above zero drops headers and detail trees, leaving bare results.
    pub q_level: u8,
}
