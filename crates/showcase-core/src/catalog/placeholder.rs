//! Deterministic stand-ins for items and portraits without an image

/// Initials plus a stable hue, derived only from the item's id and title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub initials: String,
    /// Hue in degrees [0, 360)
    pub hue: u16,
}

impl Placeholder {
    pub fn new(id: &str, title: &str) -> Self {
        Self {
            initials: initials(title),
            hue: hue_for(id),
        }
    }
}

/// First letter of the first two words, uppercased
pub fn initials(title: &str) -> String {
    let initials: String = title
        .split(|c: char| c.is_whitespace() || c == '-')
        .filter_map(|word| word.chars().find(|c| c.is_alphanumeric()))
        .take(2)
        .flat_map(char::to_uppercase)
        .collect();

    if initials.is_empty() {
        "?".to_string()
    } else {
        initials
    }
}

/// FNV-1a over the id, folded into a hue
fn hue_for(id: &str) -> u16 {
    let hash = id.bytes().fold(0x811c_9dc5_u32, |hash, byte| {
        (hash ^ byte as u32).wrapping_mul(0x0100_0193)
    });
    (hash % 360) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        assert_eq!(initials("Floating Island"), "FI");
        assert_eq!(initials("Nebula - Interactive Web Experience"), "NI");
        assert_eq!(initials("zen"), "Z");
        assert_eq!(initials("   "), "?");
    }

    #[test]
    fn test_placeholder_is_deterministic() {
        let a = Placeholder::new("3", "Floating Island");
        let b = Placeholder::new("3", "Floating Island");
        assert_eq!(a, b);
        assert!(a.hue < 360);
    }
}
