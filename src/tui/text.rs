use crate::terminal::{box_bottom, box_line, box_line_center, box_opt, box_top};

pub fn print_help() {
    box_top("Passgen");
    box_line_center("Password generator with rolling history");
    box_line("");
    box_line("MODES:");
    box_line("  1) Interactive: Run without arguments. Opens a screen");
    box_line("     with class toggles, a length control, and the");
    box_line("     history of the last 5 passwords.");
    box_line("  2) Client: Pass flags directly (e.g., -l 16 -n 3) to");
    box_line("     generate passwords without the screen.");
    box_line("");
    box_line("USAGE:");
    box_line("  passgen [OPTIONS]");
    box_line("");
    box_line("OPTIONS:");
    box_line(" Password:");
    box_opt("  -l, --length <N>", "Characters per password, 8-20 (default: 12)");
    box_opt("  -n, --number <N>", "How many to generate");
    box_opt("  -e, --easy", "Easy-to-read charset, skips lookalike characters");
    box_opt("      --no-upper", "Drop uppercase letters");
    box_opt("      --no-lower", "Drop lowercase letters");
    box_opt("      --no-digits", "Drop digits");
    box_opt("      --no-special", "Drop special characters");
    box_line("");
    box_line(" Output:");
    box_opt("  -b, --board", "Copy to clipboard instead of printing");
    box_opt("      --history", "Print the retained history (last 5) after generating");
    box_opt("  -q, --quiet", "Suppress warnings and confirmations");
    box_line("");
    box_line(" Info:");
    box_opt("  -h, --help", "Display this help message");
    box_opt("  -v, --version", "Display version");
    box_line("");
    box_line("EXAMPLES:");
    box_line("  passgen                  Interactive screen");
    box_line("  passgen -l 16            One password, 16 characters");
    box_line("  passgen -l 20 -n 3       Three passwords, 20 characters");
    box_line("  passgen -e -b            Easy-to-read, straight to clipboard");
    box_line("  passgen -n 6 --history   Show the 5 most recent retained");
    box_line("");
    box_bottom();
    println!();
}
