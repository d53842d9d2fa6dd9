// src/affiliate/mod.rs
// Partner offers keyed by traveler persona
//
// Placeholder table until a real affiliate feed exists. Links are "#".

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffiliateOffer {
    pub id: String,
    pub name: String,
    pub description: String,
    pub link: String,
}

struct OfferEntry {
    id: &'static str,
    name: &'static str,
    description: &'static str,
}

const FOODIE: &[OfferEntry] = &[
    OfferEntry {
        id: "1",
        name: "Wine Tasting Tour",
        description: "Enjoy a guided tour of local vineyards.",
    },
    OfferEntry {
        id: "2",
        name: "Cooking Class",
        description: "Learn to cook traditional Sardinian dishes.",
    },
];

const ADVENTURER: &[OfferEntry] = &[
    OfferEntry {
        id: "3",
        name: "Hiking Excursion",
        description: "Explore the rugged terrain of Sardinia.",
    },
    OfferEntry {
        id: "4",
        name: "Boat Trip",
        description: "Discover hidden coves and beaches.",
    },
];

const RELAXER: &[OfferEntry] = &[
    OfferEntry {
        id: "5",
        name: "Spa Day",
        description: "Indulge in a relaxing spa experience.",
    },
    OfferEntry {
        id: "6",
        name: "Beach Retreat",
        description: "Unwind on the beautiful beaches of Sardinia.",
    },
];

/// Resolve a persona key to its offer group. Wizard persona ids are accepted
/// alongside the affiliate keys (`culture` -> foodie, `relaxation` -> relaxer).
fn entries_for(persona: &str) -> &'static [OfferEntry] {
    match persona.trim().to_lowercase().as_str() {
        "foodie" | "culture" => FOODIE,
        "adventurer" => ADVENTURER,
        "relaxer" | "relaxation" => RELAXER,
        _ => &[],
    }
}

/// Offers for a persona key. Unknown or empty keys give an empty list.
pub fn offers_for(persona: &str) -> Vec<AffiliateOffer> {
    entries_for(persona)
        .iter()
        .map(|entry| AffiliateOffer {
            id: entry.id.to_string(),
            name: entry.name.to_string(),
            description: entry.description.to_string(),
            link: "#".to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_personas_have_two_offers() {
        for key in ["foodie", "adventurer", "relaxer"] {
            assert_eq!(offers_for(key).len(), 2, "{key}");
        }
        assert_eq!(offers_for("adventurer")[1].name, "Boat Trip");
    }

    #[test]
    fn wizard_ids_alias_affiliate_keys() {
        assert_eq!(offers_for("culture"), offers_for("foodie"));
        assert_eq!(offers_for("relaxation"), offers_for("relaxer"));
        assert_eq!(offers_for("Adventurer"), offers_for("adventurer"));
    }

    #[test]
    fn unknown_persona_is_empty() {
        assert!(offers_for("astronaut").is_empty());
        assert!(offers_for("").is_empty());
    }
}
