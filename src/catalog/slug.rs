use regex::Regex;
use std::sync::LazyLock;

static NON_ALPHANUMERIC_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("Invalid slug regex."));

/// Derives URL-safe slug from the display name: strips accents, lowercases, replaces every run
/// of non-alphanumeric characters with a single `-` and trims leading and trailing `-`.
pub fn slugify(text: &str) -> String {
    let mut folded = String::with_capacity(text.len());
    for c in text.chars().flat_map(char::to_lowercase) {
        if is_combining_mark(c) {
            continue;
        }

        match fold_accent(c) {
            Some(replacement) => folded.push_str(replacement),
            None => folded.push(c),
        }
    }

    NON_ALPHANUMERIC_REGEX
        .replace_all(&folded, "-")
        .trim_matches('-')
        .to_string()
}

/// Slug of a record without one: derived from the display name, or from the identifier if the
/// name has no alphanumeric characters.
pub fn derive_slug(name: &str, id: &str) -> String {
    match slugify(name) {
        slug if slug.is_empty() => slugify(id),
        slug => slug,
    }
}

/// Combining diacritical marks, present when the text is in decomposed form.
fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}

/// Maps lowercase Latin-1 and Latin Extended-A letters to their ASCII base.
fn fold_accent(c: char) -> Option<&'static str> {
    let folded = match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => "a",
        'æ' => "ae",
        'ç' | 'ć' | 'ĉ' | 'ċ' | 'č' => "c",
        'ď' | 'đ' => "d",
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => "e",
        'ĝ' | 'ğ' | 'ġ' | 'ģ' => "g",
        'ĥ' | 'ħ' => "h",
        'ì' | 'í' | 'î' | 'ï' | 'ĩ' | 'ī' | 'ĭ' | 'į' | 'ı' => "i",
        'ĵ' => "j",
        'ķ' => "k",
        'ĺ' | 'ļ' | 'ľ' | 'ŀ' | 'ł' => "l",
        'ñ' | 'ń' | 'ņ' | 'ň' => "n",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ŏ' | 'ő' => "o",
        'œ' => "oe",
        'ŕ' | 'ŗ' | 'ř' => "r",
        'ś' | 'ŝ' | 'ş' | 'š' => "s",
        'ß' => "ss",
        'ţ' | 'ť' | 'ŧ' => "t",
        'ù' | 'ú' | 'û' | 'ü' | 'ũ' | 'ū' | 'ŭ' | 'ů' | 'ű' | 'ų' => "u",
        'ŵ' => "w",
        'ý' | 'ÿ' | 'ŷ' => "y",
        'ź' | 'ż' | 'ž' => "z",
        _ => return None,
    };

    Some(folded)
}

#[cfg(test)]
mod tests {
    use super::{derive_slug, slugify};

    #[test]
    fn derives_slugs() {
        assert_eq!(slugify("Test Item"), "test-item");
        assert_eq!(slugify("Guitarra Clásica para Niños"), "guitarra-clasica-para-ninos");
        assert_eq!(slugify("  --Rock & Roll!!  "), "rock-roll");
        assert_eq!(slugify("C++ / Jazz 101"), "c-jazz-101");
        assert_eq!(slugify("ÜBER Straße"), "uber-strasse");
        assert_eq!(slugify("already-a-slug"), "already-a-slug");
    }

    #[test]
    fn strips_decomposed_accents() {
        assert_eq!(slugify("Me\u{301}todo Ra\u{301}pido"), "metodo-rapido");
    }

    #[test]
    fn handles_text_without_alphanumerics() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("¡¿!?"), "");
        assert_eq!(slugify("♫ ♪"), "");
    }

    #[test]
    fn derives_slugs_from_id_when_name_has_no_alphanumerics() {
        assert_eq!(derive_slug("Marta Ríos", "t-7"), "marta-rios");
        assert_eq!(derive_slug("♫ ♪", "T 7"), "t-7");
        assert_eq!(derive_slug("", ""), "");
    }
}
