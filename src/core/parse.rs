/// Fallback argument-count cap when `sysconf(_SC_ARG_MAX)` is unavailable.
pub const DEFAULT_MAX_ARGS: usize = 4096;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub argv: Vec<String>,
    pub background: bool,
}

impl CommandLine {
    pub fn program(&self) -> &str {
        &self.argv[0]
    }

    pub fn args(&self) -> &[String] {
        &self.argv[1..]
    }
}

/// Split a line into an argument vector, capped at the system argument
/// limit. A trailing standalone `&` is stripped and recorded as the
/// background flag. Empty and all-whitespace lines parse to `None`.
pub fn parse(line: &str) -> Option<CommandLine> {
    parse_with_limit(line, max_args())
}

pub fn parse_with_limit(line: &str, limit: usize) -> Option<CommandLine> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut argv: Vec<String> = trimmed
        .split_whitespace()
        .take(limit)
        .map(str::to_owned)
        .collect();

    let background = argv.last().map(|tok| tok == "&").unwrap_or(false);
    if background {
        argv.pop();
    }

    if argv.is_empty() {
        return None;
    }

    Some(CommandLine { argv, background })
}

pub fn max_args() -> usize {
    // sysconf reports -1 when the limit is indeterminate
    let limit = unsafe { libc::sysconf(libc::_SC_ARG_MAX) };
    if limit > 0 {
        limit as usize
    } else {
        DEFAULT_MAX_ARGS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_splits_on_whitespace() {
        let cmd = parse("ls -a -l").unwrap();
        assert_eq!(cmd.argv, vec!["ls", "-a", "-l"]);
        assert_eq!(cmd.program(), "ls");
        assert_eq!(cmd.args(), &["-a".to_string(), "-l".to_string()]);
        assert!(!cmd.background);
    }

    #[test]
    fn test_parse_trims_surrounding_whitespace() {
        assert_eq!(parse("   ls -a   "), parse("ls -a"));
        // trimming is idempotent: an already-trimmed line parses the same
        assert_eq!(parse("ls -a"), parse(" \t ls -a \n "));
    }

    #[test]
    fn test_parse_mixed_separators() {
        let cmd = parse("echo\ta\nb  c").unwrap();
        assert_eq!(cmd.argv, vec!["echo", "a", "b", "c"]);
    }

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(parse(""), None);
        assert_eq!(parse("   "), None);
        assert_eq!(parse("\t\n"), None);
    }

    #[test]
    fn test_parse_background_marker() {
        let cmd = parse("sleep 5 &").unwrap();
        assert_eq!(cmd.argv, vec!["sleep", "5"]);
        assert!(cmd.background);

        // the marker only counts as its own token
        let cmd = parse("sleep 5&").unwrap();
        assert_eq!(cmd.argv, vec!["sleep", "5&"]);
        assert!(!cmd.background);

        // a bare marker leaves nothing to run
        assert_eq!(parse("&"), None);
        assert_eq!(parse("  &  "), None);
    }

    #[test]
    fn test_parse_caps_argument_count() {
        let cmd = parse_with_limit("a b c d e", 3).unwrap();
        assert_eq!(cmd.argv, vec!["a", "b", "c"]);
        assert!(!cmd.background);
    }

    #[test]
    fn test_max_args_is_positive() {
        assert!(max_args() > 0);
    }
}
