pub struct Config {
    /// Suppresses decorative output. 1 drops the banner and section
    /// headers, 2 additionally drops the breakdown tree and chart and
    /// leaves only the summary line and tips.
    pub quiet: u8,
    /// Skips the startup banner without touching anything else.
    pub no_banner: bool,
    /// Skips the emissions chart while keeping the textual breakdown.
    pub no_chart: bool,
}
