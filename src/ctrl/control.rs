use crate::cmds::{Cmd, CmdResult};
use crate::ctx::Context;

/// A receiver of decoded commands. Controllers mutate the shared context
/// and hand back anything they do not consume.
pub trait Control {
    fn send_cmd(&mut self, cmd: &Cmd, context: &mut Context) -> CmdResult;
}
