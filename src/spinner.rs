//! Terminal loading indicator, shown while a request is in flight.

use std::io::Write;
use std::time::Duration;

use tokio::task::JoinHandle;

const FRAMES: &[&str] = &["|", "/", "-", "\\"];

const TICK: Duration = Duration::from_millis(100);

/// An animated indicator running in a background task.
///
/// [`Spinner::start`] shows it, [`Spinner::stop`] clears it. It draws to
/// stderr so the result area (stdout) stays clean. Dropping the spinner
/// without calling `stop` also terminates the task, since the animation
/// loop exits as soon as the cancel channel closes.
pub struct Spinner {
    handle: JoinHandle<()>,
    cancel: tokio::sync::watch::Sender<bool>,
}

impl Spinner {
    /// Start the indicator with a label, e.g. `"enhancing"`.
    pub fn start(label: &str) -> Self {
        let (cancel, mut cancelled) = tokio::sync::watch::channel(false);
        let label = label.to_string();

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(TICK);
            let mut frame = 0usize;
            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        // \r returns to column 0, \x1b[2K wipes the old frame
                        eprint!("\x1b[2K\r{} {}...", FRAMES[frame % FRAMES.len()], label);
                        let _ = std::io::stderr().flush();
                        frame += 1;
                    }
                    // Err means the sender is gone, stop in that case too
                    _ = cancelled.changed() => break,
                }
            }
            eprint!("\x1b[2K\r");
            let _ = std::io::stderr().flush();
        });

        Self { handle, cancel }
    }

    /// Stop the indicator and wipe its line.
    pub async fn stop(self) {
        let _ = self.cancel.send(true);
        let _ = self.handle.await;
    }
}
