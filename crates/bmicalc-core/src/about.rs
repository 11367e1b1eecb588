//! Explanatory text for the "what is BMI" dialog.

/// Dialog title.
pub const ABOUT_TITLE: &str = "Què és l'IMC?";

/// Dialog paragraphs.
pub const ABOUT_PARAGRAPHS: [&str; 3] = [
    "L'Índex de Massa Corporal (IMC) és una mesura que relaciona el pes i l'alçada per estimar el greix corporal d'una persona.",
    "És una eina útil per identificar ràpidament possibles problemes de pes (pes insuficient, sobrepès o obesitat) en adults.",
    "Important: L'IMC no distingeix entre greix i múscul. Per això, pot no ser precís per a atletes, gent gran o dones embarassades. Sempre ha de ser interpretat en el context d'un estil de vida global i, si cal, amb l'ajuda d'un professional de la salut.",
];

/// Paragraphs joined with blank lines.
#[must_use]
pub fn about_text() -> String {
    ABOUT_PARAGRAPHS.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paragraphs_separated_by_blank_line() {
        let text = about_text();
        assert_eq!(text.matches("\n\n").count(), ABOUT_PARAGRAPHS.len() - 1);
        assert!(text.starts_with("L'Índex de Massa Corporal"));
    }
}
