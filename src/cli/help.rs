use crate::i18n::Messages;

pub fn render_help(messages: &Messages) -> String {
    format!(
        "{}\n\n{}\n\n{}\n  -h, -help          {}\n  -lang <code>       {}\n",
        messages.get("help_usage"),
        messages.get("help_description"),
        messages.get("help_options"),
        messages.get("help_flag"),
        messages.get("help_lang_flag"),
    )
}
