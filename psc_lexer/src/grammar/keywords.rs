//! Reserved words of the pseudocode teaching language
//!
//! The default dialect is the Spanish PSeInt-style keyword set used in
//! algorithm courses. Keyword matching is exact-case against the
//! canonical mixed-case spelling (`Algoritmo`, `FinAlgoritmo`, ...);
//! boolean literals are the only case-insensitive words.
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::OnceLock;

/// Canonical keywords of the default dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    // === PROGRAM STRUCTURE ===
    Algoritmo,
    FinAlgoritmo,
    Funcion,
    FinFuncion,
    Procedimiento,

    // === DECLARATIONS ===
    Definir,
    Como,
    Entero,
    Real,
    Caracter,

    // === I/O ===
    Leer,
    Escribir,

    // === SELECTION ===
    Si,
    Entonces,
    Sino,
    FinSi,
    Segun,
    Hacer,
    Caso,
    De,
    Otro,
    Modo,
    FinSegun,

    // === ITERATION ===
    Mientras,
    FinMientras,
    Repetir,
    Hasta,
    Que,
    Para,
    FinPara,

    // === BOOLEAN LITERAL SPELLINGS ===
    Verdadero,
    Falso,
}

impl Keyword {
    /// Every keyword of the default dialect, grouped as declared above
    pub const ALL: [Keyword; 32] = [
        Self::Algoritmo,
        Self::FinAlgoritmo,
        Self::Funcion,
        Self::FinFuncion,
        Self::Procedimiento,
        Self::Definir,
        Self::Como,
        Self::Entero,
        Self::Real,
        Self::Caracter,
        Self::Leer,
        Self::Escribir,
        Self::Si,
        Self::Entonces,
        Self::Sino,
        Self::FinSi,
        Self::Segun,
        Self::Hacer,
        Self::Caso,
        Self::De,
        Self::Otro,
        Self::Modo,
        Self::FinSegun,
        Self::Mientras,
        Self::FinMientras,
        Self::Repetir,
        Self::Hasta,
        Self::Que,
        Self::Para,
        Self::FinPara,
        Self::Verdadero,
        Self::Falso,
    ];

    /// Get the exact string representation as it appears in source
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Algoritmo => "Algoritmo",
            Self::FinAlgoritmo => "FinAlgoritmo",
            Self::Funcion => "Funcion",
            Self::FinFuncion => "FinFuncion",
            Self::Procedimiento => "Procedimiento",
            Self::Definir => "Definir",
            Self::Como => "Como",
            Self::Entero => "Entero",
            Self::Real => "Real",
            Self::Caracter => "Caracter",
            Self::Leer => "Leer",
            Self::Escribir => "Escribir",
            Self::Si => "Si",
            Self::Entonces => "Entonces",
            Self::Sino => "Sino",
            Self::FinSi => "FinSi",
            Self::Segun => "Segun",
            Self::Hacer => "Hacer",
            Self::Caso => "Caso",
            Self::De => "De",
            Self::Otro => "Otro",
            Self::Modo => "Modo",
            Self::FinSegun => "FinSegun",
            Self::Mientras => "Mientras",
            Self::FinMientras => "FinMientras",
            Self::Repetir => "Repetir",
            Self::Hasta => "Hasta",
            Self::Que => "Que",
            Self::Para => "Para",
            Self::FinPara => "FinPara",
            Self::Verdadero => "Verdadero",
            Self::Falso => "Falso",
        }
    }
}

/// The complete default keyword list in canonical casing, derived from
/// the `Keyword` enum so the two can never drift apart.
pub fn default_keywords() -> &'static [&'static str] {
    static WORDS: OnceLock<Vec<&'static str>> = OnceLock::new();
    WORDS
        .get_or_init(|| Keyword::ALL.iter().map(|k| k.as_str()).collect())
        .as_slice()
}

/// The active reserved-word set for one tokenization pass.
///
/// Mutable only at construction: a custom list replaces the default
/// wholesale, it is never merged. Membership is exact-case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordSet {
    words: HashSet<String>,
}

impl KeywordSet {
    /// Build a keyword set from a custom word list, replacing the
    /// default list entirely.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Exact-case membership test
    pub fn contains(&self, lexeme: &str) -> bool {
        self.words.contains(lexeme)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for KeywordSet {
    fn default() -> Self {
        Self::new(default_keywords().iter().copied())
    }
}

/// Classification of an identifier-shaped lexeme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordClass {
    /// Member of the active keyword set
    Keyword,
    /// Boolean literal spelling (case-insensitive)
    Boolean,
    /// Everything else
    Identifier,
}

/// Classify a maximally-munched identifier lexeme against the active
/// keyword set. Checked only after the full identifier match; keywords
/// are a subset of identifier shapes, not a separate pattern.
pub fn classify_word(lexeme: &str, keywords: &KeywordSet) -> WordClass {
    if keywords.contains(lexeme) {
        WordClass::Keyword
    } else if is_boolean_literal(lexeme) {
        WordClass::Boolean
    } else {
        WordClass::Identifier
    }
}

/// Case-insensitive check for the boolean literal spellings
pub fn is_boolean_literal(lexeme: &str) -> bool {
    lexeme.eq_ignore_ascii_case("Verdadero") || lexeme.eq_ignore_ascii_case("Falso")
}
