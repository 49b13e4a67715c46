use genpass::{CharClass, PasswordGenerator, SPECIAL_CHARS};

use super::Status;
use crate::terminal::{
    BOLD, BOX_WIDTH, DIM, GREEN, RESET, UNDERLINE, box_bottom, box_bottom_styled, box_line,
    box_line_center, box_line_styled, box_opt, box_rule, box_top, box_top_styled, clear, flush,
    print_error,
};

const PASSWORD_WIDTH: usize = BOX_WIDTH - 4;

fn on_off(enabled: bool) -> &'static str {
    if enabled { "on" } else { "off" }
}

/// Dim settings whose class is switched off, like a disabled control.
fn setting_line(enabled: bool, text: String) {
    if enabled {
        box_line(&text);
    } else {
        box_line(&format!("{DIM}{text}{RESET}"));
    }
}

pub fn print_view(generator: &PasswordGenerator, status: &Status) {
    clear();

    let copied = matches!(status, Status::Copied(_));
    let style = if copied { GREEN } else { "" };

    box_top_styled("Password", style);
    for chunk in generator.password().as_bytes().chunks(PASSWORD_WIDTH) {
        box_line_styled(std::str::from_utf8(chunk).unwrap_or_default(), style);
    }
    box_bottom_styled(style);
    if copied {
        println!("{GREEN}{:^BOX_WIDTH$}{RESET}", "Copied to clipboard");
    } else {
        println!();
    }

    let settings = generator.settings();
    let limits = settings.limits();
    let digits = settings.includes(CharClass::Digits);
    let special = settings.includes(CharClass::Special);

    box_top("Settings");
    box_line_center("Esc/CTRL+Q: cancel input | CTRL+U: clear input");
    box_line("");

    box_line(&format!("{UNDERLINE}Length{RESET}:"));
    box_line(&format!(
        "  1) Password length: {} (max {})",
        settings.length(),
        limits.max_length()
    ));

    box_line("");
    box_line(&format!("{UNDERLINE}Character classes{RESET}:"));
    box_line(&format!(
        "  2) Uppercase A-Z: {}",
        on_off(settings.includes(CharClass::Upper))
    ));
    box_line(&format!(
        "  3) Lowercase a-z: {}",
        on_off(settings.includes(CharClass::Lower))
    ));
    box_line(&format!("  4) Digits 0-9: {}", on_off(digits)));
    setting_line(
        digits,
        format!(
            "  5) Minimum digits: {} (max {})",
            settings.min_count(CharClass::Digits),
            limits.max_min_per_class()
        ),
    );
    box_line(&format!("  6) Special characters: {}", on_off(special)));
    setting_line(
        special,
        format!(
            "  7) Minimum special: {} (max {})",
            settings.min_count(CharClass::Special),
            limits.max_min_per_class()
        ),
    );
    let custom = match settings.custom_special_chars() {
        "" => "(all)",
        chars => chars,
    };
    setting_line(special, format!("  8) Special set: {custom}"));

    box_line("");
    box_rule();
    box_line_center("Enter) new | c) copy | r) reset | h) help | q) quit");
    box_bottom();

    match status {
        Status::Notice(msg) => print_error(msg),
        _ => println!(),
    }
    flush();
}

pub fn print_help() {
    clear();
    box_top("genpass");
    box_line_center("Constraint-driven password generator");
    box_line("");
    box_line(&format!("{BOLD}KEYS:{RESET}"));
    box_opt("  1", "Set password length");
    box_opt("  2 / 3", "Toggle uppercase / lowercase letters");
    box_opt("  4 / 6", "Toggle digits / special characters");
    box_opt("  5 / 7", "Set the minimum number of digits / special characters");
    box_opt("  8", "Restrict special characters to a custom set");
    box_opt("  Enter, g", "Generate a new password");
    box_opt("  c", "Copy the password to the clipboard");
    box_opt("  r", "Restore default settings");
    box_opt("  q, Esc", "Quit");
    box_line("");
    box_line(&format!("{BOLD}RULES:{RESET}"));
    box_line("  Every change generates a new password.");
    box_line("  Length is raised to fit all enabled minimums.");
    box_line("  Switching every class off keeps lowercase on.");
    box_line(&format!(
        "  Custom sets keep only: {}",
        String::from_utf8_lossy(SPECIAL_CHARS)
    ));
    box_line("");
    box_line("Run `genpass --help` for command-line flags.");
    box_bottom();
    println!();
    println!("Press any key to return");
    flush();
}
