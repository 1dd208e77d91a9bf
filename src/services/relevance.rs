// src/services/relevance.rs

/// Lowercase terms that mark a message as being about animals or species.
pub static SPECIES_KEYWORDS: &[&str] = &[
    "animal", "animals", "species", "wildlife", "mammal", "bird", "fish", "reptile", "amphibian",
    "habitat", "diet", "conservation", "endangered", "extinct", "ecosystem", "biodiversity",
    "predator", "prey", "carnivore", "herbivore", "omnivore", "migration", "breeding",
    "lion", "tiger", "elephant", "whale", "dolphin", "shark", "eagle", "penguin",
    "bear", "wolf", "deer", "rabbit", "squirrel", "butterfly", "bee", "spider",
];

/// First keyword found in the message, if any. Plain substring match on the
/// lowercased text, so "beer" matches "bee".
pub fn matched_keyword(msg: &str) -> Option<&'static str> {
    let msg_lower = msg.to_lowercase();

    SPECIES_KEYWORDS
        .iter()
        .copied()
        .find(|keyword| msg_lower.contains(keyword))
}

pub fn is_relevant(msg: &str) -> bool {
    matched_keyword(msg).is_some()
}
