/// Fix romanization defects found in imported vocabulary lists: a doubled
/// leading consonant (`ddenki` → `denki`) and a tripled n (`onnna` → `onna`).
///
/// Doubled consonants elsewhere are left alone since they spell っ.
pub fn repair_romanization(reading: &str) -> String {
    let mut fixed = reading.to_string();

    let mut chars = fixed.chars();
    if let (Some(a), Some(b)) = (chars.next(), chars.next()) {
        if a == b && is_consonant(a) {
            fixed.remove(0);
        }
    }

    while fixed.contains("nnn") {
        fixed = fixed.replace("nnn", "nn");
    }
    fixed
}

fn is_consonant(c: char) -> bool {
    c.is_ascii_alphabetic() && !matches!(c.to_ascii_lowercase(), 'a' | 'i' | 'u' | 'e' | 'o')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_double_consonant() {
        assert_eq!(repair_romanization("ddenki"), "denki");
        assert_eq!(repair_romanization("ttokei"), "tokei");
        assert_eq!(repair_romanization("ssensei"), "sensei");
        assert_eq!(repair_romanization("nnihon"), "nihon");
    }

    #[test]
    fn inner_double_consonant_kept() {
        assert_eq!(repair_romanization("kitte"), "kitte");
        assert_eq!(repair_romanization("zasshi"), "zasshi");
    }

    #[test]
    fn leading_vowels_kept() {
        assert_eq!(repair_romanization("ookii"), "ookii");
        assert_eq!(repair_romanization("ii"), "ii");
    }

    #[test]
    fn triple_n() {
        assert_eq!(repair_romanization("onnna"), "onna");
        assert_eq!(repair_romanization("annnai"), "annai");
        assert_eq!(repair_romanization("onna"), "onna");
        assert_eq!(repair_romanization("nnnnn"), "nn");
    }

    #[test]
    fn untouched() {
        assert_eq!(repair_romanization("denki"), "denki");
        assert_eq!(repair_romanization(""), "");
        assert_eq!(repair_romanization("d"), "d");
    }
}
