/*!
Miscellaneous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to help trace how a formula was read and how a verdict was reached.

Note, no log implementation is provided by the library.
The `ergo` binary installs [log4rs](https://docs.rs/log4rs) when built with the `log` feature.
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the [scanner](crate::procedures::scan)
    pub const SCAN: &str = "scan";

    /// Logs related to the [parser](crate::procedures::parse)
    pub const PARSE: &str = "parse";

    /// Logs related to the [compiler](crate::procedures::compile)
    pub const COMPILE: &str = "compile";

    /// Logs related to [entailment](crate::procedures::entail)
    pub const ENTAIL: &str = "entail";
}
