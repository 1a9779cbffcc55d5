use env_logger::Builder;
use std::io::Write;

/// Logger that prefixes every line with `c`, so log output stays a valid
/// comment in PACE files written to the same stream.
pub fn build_pace_logger() {
    let mut builder = Builder::from_default_env();
    builder
        .format(|buf, record| writeln!(buf, "c {} - {}", record.level(), record.args()))
        .init();
}
