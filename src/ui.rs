use anyhow::{Context, Result};
use console::Style;
use locksafe::charset::{DIGITS, LOWERCASE, SPECIAL, UPPERCASE};
use locksafe::evaluator::{Evaluation, Verdict, MAX_SCORE};
use rpassword::read_password;
use std::io::{self, BufRead, Write};
use zeroize::Zeroizing;

pub const TIPS: [&str; 3] = [
    "Use at least 12 characters.",
    "Include uppercase, lowercase, numbers, and special characters.",
    "Avoid common passwords and personal details.",
];

pub struct DisplayOptions {
    pub unicode_support: bool,
    pub color_support: bool,
    pub quiet: bool,
}

pub struct StatusSymbols {
    pub ok: &'static str,
    pub warn: &'static str,
    pub fail: &'static str,
    pub branch: &'static str,
    pub last_branch: &'static str,
}

pub fn detect_unicode_support() -> bool {
    supports_unicode::on(supports_unicode::Stream::Stdout)
}

pub fn detect_color_support() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

pub fn get_status_symbols(unicode_support: bool) -> StatusSymbols {
    if unicode_support {
        StatusSymbols {
            ok: "✓",
            warn: "!",
            fail: "✗",
            branch: "├─",
            last_branch: "└─",
        }
    } else {
        StatusSymbols {
            ok: "+",
            warn: "!",
            fail: "x",
            branch: "|-",
            last_branch: "`-",
        }
    }
}

fn verdict_style(verdict: Verdict, color_support: bool) -> Style {
    if !color_support {
        return Style::new();
    }

    match verdict {
        Verdict::Strong => Style::new().green(),
        Verdict::Moderate => Style::new().yellow(),
        Verdict::Weak | Verdict::TooCommon => Style::new().red(),
    }
}

fn verdict_symbol(verdict: Verdict, symbols: &StatusSymbols) -> &'static str {
    match verdict {
        Verdict::Strong => symbols.ok,
        Verdict::Moderate => symbols.warn,
        Verdict::Weak | Verdict::TooCommon => symbols.fail,
    }
}

fn pluralize(count: usize, singular: &'static str, plural: &'static str) -> &'static str {
    if count == 1 {
        singular
    } else {
        plural
    }
}

const PASSWORD_LINE_CAPACITY: usize = 1024;

fn strip_line_ending(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}

fn require_non_empty(password: Zeroizing<String>) -> Result<Zeroizing<String>> {
    if password.is_empty() {
        anyhow::bail!("Please enter a password to check.");
    }
    Ok(password)
}

pub fn prompt_password() -> Result<Zeroizing<String>> {
    print!("Enter a password: ");
    io::stdout().flush()?;

    let password = Zeroizing::new(read_password().context("Failed to read password")?);
    require_non_empty(password)
}

pub fn read_password_line() -> Result<Zeroizing<String>> {
    read_password_from(io::stdin().lock())
}

fn read_password_from<R: BufRead>(mut reader: R) -> Result<Zeroizing<String>> {
    // Sized up front so the buffer is not reallocated, leaving unwiped copies.
    let mut line = Zeroizing::new(String::with_capacity(PASSWORD_LINE_CAPACITY));
    reader
        .read_line(&mut line)
        .context("Failed to read password from stdin")?;

    strip_line_ending(&mut line);
    require_non_empty(line)
}

pub fn display_evaluation(evaluation: &Evaluation, options: &DisplayOptions) {
    let symbols = get_status_symbols(options.unicode_support);
    let style = verdict_style(evaluation.verdict, options.color_support);
    let symbol = verdict_symbol(evaluation.verdict, &symbols);

    println!(
        "Strength Score: {}/{}",
        style.apply_to(evaluation.score),
        MAX_SCORE
    );

    if options.quiet {
        println!("{}", evaluation.message());
        return;
    }

    println!();

    match evaluation.verdict {
        Verdict::TooCommon => {
            println!(
                "{} {}: Your password is too common! Choose a unique one.",
                style.apply_to(format!("[{}]", symbol)),
                style.apply_to(evaluation.verdict.label())
            );
        }
        Verdict::Strong => {
            println!(
                "{} {} Password! Well done.",
                style.apply_to(format!("[{}]", symbol)),
                style.apply_to(evaluation.verdict.label())
            );
        }
        Verdict::Moderate | Verdict::Weak => {
            let count = evaluation.suggestions.len();
            println!(
                "{} {}: {}/{} checks passed, {} {}",
                style.apply_to(format!("[{}]", symbol)),
                style.apply_to(evaluation.verdict.label()),
                evaluation.passed_checks(),
                MAX_SCORE,
                count,
                pluralize(count, "suggestion", "suggestions")
            );

            for (i, suggestion) in evaluation.suggestions.iter().enumerate() {
                let prefix = if i == count - 1 {
                    symbols.last_branch
                } else {
                    symbols.branch
                };
                println!("  {} {}", prefix, suggestion);
            }
        }
    }

    println!();
    display_tips(options);
}

pub fn display_generated(password: &Zeroizing<String>, options: &DisplayOptions) {
    if options.quiet {
        println!("{}", &**password);
        return;
    }

    let style = if options.color_support {
        Style::new().green().bold()
    } else {
        Style::new()
    };

    let symbols = get_status_symbols(options.unicode_support);

    println!("Generated Password:\n{}\n", style.apply_to(&**password));
    println!(
        "  {} Length     {} {}",
        symbols.branch,
        password.len(),
        pluralize(password.len(), "char", "chars")
    );
    println!(
        "  {} Charset    {}",
        symbols.last_branch,
        charset_summary()
    );
}

fn charset_summary() -> String {
    format!(
        "{} chars ({} upper, {} lower, {} digits, {} symbols)",
        locksafe::charset::alphabet_size(),
        UPPERCASE.len(),
        LOWERCASE.len(),
        DIGITS.len(),
        SPECIAL.len()
    )
}

pub fn display_tips(options: &DisplayOptions) {
    let symbols = get_status_symbols(options.unicode_support);
    let heading = if options.color_support {
        Style::new().cyan().bold()
    } else {
        Style::new()
    };

    println!("{}", heading.apply_to("Tips for a Strong Password:"));
    for (i, tip) in TIPS.iter().enumerate() {
        let prefix = if i == TIPS.len() - 1 {
            symbols.last_branch
        } else {
            symbols.branch
        };
        println!("  {} {}", prefix, tip);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use locksafe::evaluate_password;

    #[test]
    fn test_get_status_symbols_unicode() {
        let symbols = get_status_symbols(true);
        assert_eq!(symbols.ok, "✓");
        assert_eq!(symbols.warn, "!");
        assert_eq!(symbols.fail, "✗");
    }

    #[test]
    fn test_get_status_symbols_ascii() {
        let symbols = get_status_symbols(false);
        assert_eq!(symbols.ok, "+");
        assert_eq!(symbols.warn, "!");
        assert_eq!(symbols.fail, "x");
        assert!(symbols.branch.is_ascii());
        assert!(symbols.last_branch.is_ascii());
    }

    #[test]
    fn test_verdict_symbols() {
        let symbols = get_status_symbols(false);
        assert_eq!(verdict_symbol(Verdict::Strong, &symbols), "+");
        assert_eq!(verdict_symbol(Verdict::Moderate, &symbols), "!");
        assert_eq!(verdict_symbol(Verdict::Weak, &symbols), "x");
        assert_eq!(verdict_symbol(Verdict::TooCommon, &symbols), "x");
    }

    #[test]
    fn test_uncolored_style_is_plain() {
        let evaluation = evaluate_password("Abcdef1!");
        let style = verdict_style(evaluation.verdict, false);
        assert_eq!(style.apply_to("Strong").force_styling(false).to_string(), "Strong");
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize(1, "char", "chars"), "char");
        assert_eq!(pluralize(0, "char", "chars"), "chars");
        assert_eq!(pluralize(5, "suggestion", "suggestions"), "suggestions");
    }

    #[test]
    fn test_strip_line_ending() {
        let cases = vec![
            ("secret\n", "secret"),
            ("secret\r\n", "secret"),
            ("secret", "secret"),
            ("  spaced  \n", "  spaced  "),
            ("\n", ""),
        ];

        for (input, expected) in cases {
            let mut line = input.to_string();
            strip_line_ending(&mut line);
            assert_eq!(line, expected);
        }
    }

    #[test]
    fn test_read_password_first_line_only() {
        let input = io::Cursor::new("Abcdef1!\r\nsecond line\n");
        let password = read_password_from(input).unwrap();
        assert_eq!(password.as_str(), "Abcdef1!");
    }

    #[test]
    fn test_read_password_keeps_preallocated_buffer() {
        let long = "x".repeat(PASSWORD_LINE_CAPACITY - 1);
        let input = io::Cursor::new(format!("{}\n", long));
        let password = read_password_from(input).unwrap();
        assert_eq!(password.len(), PASSWORD_LINE_CAPACITY - 1);
        assert_eq!(password.capacity(), PASSWORD_LINE_CAPACITY);
    }

    #[test]
    fn test_read_password_empty_rejected() {
        for input in ["", "\n", "\r\n"] {
            let err = read_password_from(io::Cursor::new(input)).unwrap_err();
            assert_eq!(err.to_string(), "Please enter a password to check.");
        }
    }

    #[test]
    fn test_charset_summary() {
        assert_eq!(
            charset_summary(),
            "70 chars (26 upper, 26 lower, 10 digits, 8 symbols)"
        );
    }

    #[test]
    fn test_empty_password_rejected() {
        let err = require_non_empty(Zeroizing::new(String::new())).unwrap_err();
        assert_eq!(err.to_string(), "Please enter a password to check.");
    }

    #[test]
    fn test_whitespace_password_accepted() {
        let password = require_non_empty(Zeroizing::new(" ".to_string())).unwrap();
        assert_eq!(password.as_str(), " ");
    }

    #[test]
    fn test_tips_count() {
        assert_eq!(TIPS.len(), 3);
        assert!(TIPS.iter().all(|tip| tip.ends_with('.')));
    }
}
