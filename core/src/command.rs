//! Administrative command handling.
//!
//! One command with a `reload` action. Replies are messages back through the
//! sender — this runs embedded in a host, not as a standalone process.

use crate::service::ListenService;

/// Permission node required for the reload action.
pub const RELOAD_PERMISSION: &str = "listenmode.reload";

/// Message-based reply surface for whoever issued the command.
pub trait CommandSender {
    fn has_permission(&self, node: &str) -> bool;
    fn send_message(&self, message: &str);
}

/// Dispatch one invocation of the admin command.
pub fn handle_command(service: &ListenService, sender: &dyn CommandSender, args: &[&str]) {
    if args.len() == 1 && args[0].eq_ignore_ascii_case("reload") {
        if !sender.has_permission(RELOAD_PERMISSION) {
            sender.send_message(&service.config().messages.no_permission);
            return;
        }
        match service.reload() {
            // Reply with the freshly loaded message set.
            Ok(()) => sender.send_message(&service.config().messages.reload),
            Err(e) => {
                tracing::error!(error = %e, "reload failed");
                sender.send_message(&format!("Reload failed: {e}"));
            }
        }
        return;
    }
    sender.send_message(&service.config().messages.invalid);
}
