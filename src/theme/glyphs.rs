/// Single-cell glyphs for candidate icons, keyed by the icon names the host
/// puts on its entries. The names follow the usual completion-kind
/// vocabulary (LSP `CompletionItemKind` spelled lowercase).
///
/// Every glyph here is one terminal cell wide so item columns stay aligned.
#[must_use]
pub fn icon_glyph(name: &str) -> char {
    match name {
        "text" => 't',
        "method" | "function" | "constructor" => 'ƒ',
        "field" | "property" => '◦',
        "variable" => 'χ',
        "class" | "struct" => 'C',
        "interface" => 'I',
        "module" => 'M',
        "unit" => 'υ',
        "value" | "constant" => 'π',
        "enum" | "enum-member" => 'Σ',
        "keyword" => 'κ',
        "snippet" => '§',
        "color" => '◉',
        "file" => 'F',
        "reference" => '&',
        "folder" => 'D',
        "event" => 'ν',
        "operator" => '±',
        "type-parameter" => 'T',
        _ => '•',
    }
}
