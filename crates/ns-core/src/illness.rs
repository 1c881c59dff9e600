//! Illnesses a house can suffer from and the cures nurses carry.
//!
//! Both enums are closed: the catalog linking them lives in `ns-world` and is
//! fixed at startup.  `as_str` returns the label observers see on the wire.

/// An ailment assigned to a house at world generation.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Illness {
    Lupus,
    Alcoholism,
    Frostbite,
    FoodPoisoning,
    IglooFever,
    Loneliness,
}

impl Illness {
    /// Every illness, in catalog order.
    pub const ALL: [Illness; 6] = [
        Illness::Lupus,
        Illness::Alcoholism,
        Illness::Frostbite,
        Illness::FoodPoisoning,
        Illness::IglooFever,
        Illness::Loneliness,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Illness::Lupus         => "Lupus",
            Illness::Alcoholism    => "Alcoholism",
            Illness::Frostbite     => "Frostbite",
            Illness::FoodPoisoning => "FoodPoisoning",
            Illness::IglooFever    => "IglooFever",
            Illness::Loneliness    => "Loneliness",
        }
    }
}

impl std::fmt::Display for Illness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A remedy picked up at a hospital and delivered to a house.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cure {
    #[cfg_attr(feature = "serde", serde(rename = "Voclosporin"))]
    Voclosporin,
    #[cfg_attr(feature = "serde", serde(rename = "Brochures for AA"))]
    AaBrochures,
    #[cfg_attr(feature = "serde", serde(rename = "A furnace"))]
    Furnace,
    #[cfg_attr(feature = "serde", serde(rename = "Pedialyte"))]
    Pedialyte,
    #[cfg_attr(feature = "serde", serde(rename = "PS5 with 1gb Internet"))]
    GameConsole,
    #[cfg_attr(feature = "serde", serde(rename = "Tickle-Me-Elmo"))]
    TickleMeElmo,
}

impl Cure {
    pub fn as_str(self) -> &'static str {
        match self {
            Cure::Voclosporin  => "Voclosporin",
            Cure::AaBrochures  => "Brochures for AA",
            Cure::Furnace      => "A furnace",
            Cure::Pedialyte    => "Pedialyte",
            Cure::GameConsole  => "PS5 with 1gb Internet",
            Cure::TickleMeElmo => "Tickle-Me-Elmo",
        }
    }
}

impl std::fmt::Display for Cure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
