use super::LineHandler;

/// A slash prefix recognized at the start of a composed line.
///
/// Matching is a case-sensitive `starts_with` against `prefix`, so
/// `/methinks` emotes and `/web site` whispers.
pub struct LineCommand {
    pub prefix: &'static str,
    pub help: &'static str,
    pub handler: LineHandler,
}

pub fn all_line_commands() -> &'static [LineCommand] {
    LINE_COMMANDS
}

/// Finds the first command whose prefix starts `raw`, in table order.
pub fn find_line_command(raw: &str) -> Option<&'static LineCommand> {
    all_line_commands()
        .iter()
        .find(|command| raw.starts_with(command.prefix))
}

// Prefixes are tried in table order; `/me` is tested before `/w`.
const LINE_COMMANDS: &[LineCommand] = &[
    LineCommand {
        prefix: "/me",
        help: "Emote in the third person; the rest of the line is drawn in italics with no sender.",
        handler: super::handle_action,
    },
    LineCommand {
        prefix: "/w",
        help: "Whisper; the rest of the line is tagged [Whisper] and tinted.",
        handler: super::handle_whisper,
    },
];
