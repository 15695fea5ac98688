use crate::faq;
use crate::i18n::Message;
use crate::pass::{CharacterClass, entropy_bits, length_to_strength_hint};
use crate::terminal::{
    RESET, UNDERLINE, box_bottom, box_chunks, box_line, box_line_center, box_opt,
    box_paragraph, box_top, clear, flush, print_error, print_rule, print_success, strength_bar,
};

use super::Widget;

pub fn print_widget(widget: &Widget) {
    let lang = widget.language();
    let settings = &widget.settings;

    clear();
    box_top(lang.text(Message::Title));
    box_line_center(lang.text(Message::Tagline));
    print_rule();

    match &widget.password {
        Some(password) => box_chunks(password.as_str()),
        None => box_line(""),
    }
    box_line(&strength_bar(length_to_strength_hint(settings.length)));
    print_rule();

    box_line(&format!(
        "{UNDERLINE}{}{RESET}: {}  ({:.1} bits)",
        lang.text(Message::PasswordLength),
        settings.length,
        entropy_bits(settings.length, settings.classes.alphabet_len())
    ));
    box_line("");
    let toggles: Vec<String> = CharacterClass::ALL
        .iter()
        .enumerate()
        .map(|(i, &class)| {
            let mark = if settings.classes.contains(class) { 'x' } else { ' ' };
            format!("{}) [{mark}] {:<24}", i + 1, lang.text(class.into()))
        })
        .collect();
    for row in toggles.chunks(2) {
        box_line(&format!("  {}", row.join("")));
    }
    print_rule();

    box_opt("Enter / g", lang.text(Message::GeneratePassword));
    box_opt("c", "Copy password");
    box_opt("←/→  ↓/↑", "Length -1/+1, -10/+10");
    box_opt("1-4", "Toggle character classes");
    box_opt("l", &format!("Language: {}", lang.display_name()));
    box_opt("f", "FAQ");
    box_opt("s", "Save settings");
    box_opt("q / Esc", "Quit");
    box_bottom();

    match &widget.notice {
        Some(notice) if notice.is_error() => print_error(&notice.text(lang)),
        Some(notice) => print_success(&notice.text(lang)),
        None => println!(),
    }
    flush();
}

pub fn print_faq() {
    clear();
    box_top(faq::TITLE);
    for (i, entry) in faq::ENTRIES.iter().enumerate() {
        if i > 0 {
            box_line("");
        }
        box_line(&format!("{UNDERLINE}{}{RESET}", entry.question));
        box_paragraph(entry.answer, 2);
    }
    box_bottom();
    println!("Press any key to return");
    flush();
}
