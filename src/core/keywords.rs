use unicode_normalization::UnicodeNormalization;

use crate::models::KeywordSet;

/// Filler words discarded outright: articles, prepositions, pronouns, and
/// bare desire verbs ("envie", "sortir", "manger") that carry no theme.
const STOP_WORDS: &[&str] = &[
    "envie", "envies", "sortir", "sortie", "sorties", "manger", "faire", "aller", "avoir",
    "etre", "voir", "trouver", "chercher", "veux", "veut", "voudrais", "voudrait", "souhaite",
    "aimerais", "aimerait", "adore", "une", "des", "les", "mon", "ton", "son", "mes", "tes",
    "ses", "nos", "vos", "leur", "leurs", "notre", "votre", "avec", "sans", "pour", "dans",
    "sur", "sous", "chez", "vers", "entre", "nous", "vous", "ils", "elles", "elle", "est",
    "sont", "suis", "quelque", "chose", "truc", "trucs", "endroit", "endroits", "lieu",
    "lieux", "pres", "proche", "proches", "autour", "quoi", "comme", "bien", "tres", "plus",
    "moins", "trop", "assez", "sympa", "cool", "petit", "petite", "grand", "grande", "bon",
    "bonne", "idee", "idees", "activite", "activites", "quelqu",
];

/// Temporal and sequencing qualifiers. They survive extraction but score
/// far below primary keywords.
const CONTEXT_WORDS: &[&str] = &[
    "ce", "cet", "cette", "soir", "soiree", "matin", "matinee", "midi", "aprem", "apres",
    "apresmidi", "nuit", "demain", "hier", "weekend", "week", "end", "aujourd", "hui",
    "maintenant", "tard", "tot", "bientot", "puis", "ensuite", "avant", "pendant", "lundi",
    "mardi", "mercredi", "jeudi", "vendredi", "samedi", "dimanche", "semaine", "vacances",
    "ferie",
];

/// Concrete nameable activities, foods, and venue types. These dominate
/// scoring.
const PRIMARY_WORDS: &[&str] = &[
    "kart", "karting", "bowling", "billard", "flechettes", "babyfoot", "arcade", "laser",
    "lasergame", "paintball", "escalade", "accrobranche", "trampoline", "patinoire",
    "piscine", "squash", "padel", "tennis", "foot", "futsal", "golf", "minigolf", "petanque",
    "skate", "kayak", "paddle", "escape", "quiz", "karaoke", "blindtest", "concert",
    "concerts", "spectacle", "theatre", "cinema", "film", "expo", "exposition", "musee",
    "danser", "danse", "clubbing", "boire", "biere", "bieres", "vin", "vins", "cocktail",
    "cocktails", "mojito", "cafe", "brunch", "pizza", "pizzas", "burger", "burgers", "sushi",
    "sushis", "tapas", "crepe", "crepes", "glace", "glaces", "dessert", "restaurant",
    "resto", "bar", "pub", "club", "discotheque", "terrasse", "rooftop", "spa", "massage",
    "hammam", "sauna", "bistrot", "brasserie", "guinguette", "bubble", "dj", "vr",
];

/// Two-letter tokens worth keeping; everything else that short is noise
/// ("du", "le", "je", ...).
const TWO_LETTER_ALLOW: &[&str] = &["ce", "dj", "vr", "bd", "tv"];

/// Classification word lists, injectable so they can be localized or
/// extended without touching the extractor.
#[derive(Debug, Clone)]
pub struct WordLists {
    pub stop: Vec<String>,
    pub context: Vec<String>,
    pub primary: Vec<String>,
    pub two_letter_allow: Vec<String>,
}

impl WordLists {
    /// The built-in French lists.
    pub fn french() -> Self {
        Self {
            stop: STOP_WORDS.iter().map(|w| w.to_string()).collect(),
            context: CONTEXT_WORDS.iter().map(|w| w.to_string()).collect(),
            primary: PRIMARY_WORDS.iter().map(|w| w.to_string()).collect(),
            two_letter_allow: TWO_LETTER_ALLOW.iter().map(|w| w.to_string()).collect(),
        }
    }
}

impl Default for WordLists {
    fn default() -> Self {
        Self::french()
    }
}

/// Turns a free-text envie query into classified keywords.
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    lists: WordLists,
}

impl KeywordExtractor {
    pub fn new(lists: WordLists) -> Self {
        Self { lists }
    }

    /// Extract and classify keywords from a raw query.
    ///
    /// An empty result (blank input, or nothing but stop words) means the
    /// query has no significant keyword; the orchestrator rejects it.
    pub fn extract(&self, query: &str) -> KeywordSet {
        let mut set = KeywordSet::default();

        for token in normalize(query).split_whitespace() {
            let len = token.chars().count();
            if len < 2 {
                continue;
            }
            if len == 2 && !self.lists.two_letter_allow.iter().any(|w| w == token) {
                continue;
            }

            // Context and primary lists win over the stop list, so "soir"
            // can be both temporal and never discarded.
            if self.lists.context.iter().any(|w| w == token) {
                set.context.push(token.to_string());
                set.all.push(token.to_string());
            } else if self.lists.primary.iter().any(|w| w == token) {
                set.primary.push(token.to_string());
                set.all.push(token.to_string());
            } else if self.lists.stop.iter().any(|w| w == token) {
                continue;
            } else {
                set.all.push(token.to_string());
            }
        }

        set
    }
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new(WordLists::french())
    }
}

/// Lowercase, strip diacritics (NFD + combining-mark removal), and map
/// punctuation to spaces so "Théâtre!" and "theatre" tokenize identically.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !unicode_normalization::char::is_combining_mark(*c))
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect()
}
