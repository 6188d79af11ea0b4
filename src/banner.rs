//! Startup banner and session summary display.

use crate::controller::SessionStats;

/// Session configuration for display in the startup banner.
pub struct BannerInfo<'a> {
    pub endpoint: &'a str,
    pub mode: &'a str,
}

/// Print the startup banner with session info.
pub fn print_banner(info: &BannerInfo) {
    println!(
        r#"
   ╔═══════════════════════════════════════╗
   ║             B O O S T E R             ║
   ║    rough prompts in, polish comes out ║
   ╚═══════════════════════════════════════╝

   version   {}
   endpoint  {}
   mode      {}
"#,
        env!("CARGO_PKG_VERSION"),
        info.endpoint,
        info.mode,
    );
}

/// Print the session summary (activation counts + farewell).
pub fn print_session_summary(stats: SessionStats) {
    if stats.enhanced + stats.failed > 0 {
        println!(
            "session: {} enhanced, {} failed",
            stats.enhanced, stats.failed
        );
    }
    println!("goodbye.");
}
