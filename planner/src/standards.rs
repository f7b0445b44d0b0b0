//! Reference room sizes used to brief the plan generator and by the CLI.
//!
//! Each entry gives minimal, standard and luxury footprints in feet for one
//! specific room kind, plus the generic kind it is drawn as.

#[cfg(test)]
#[path = "standards_test.rs"]
mod standards_test;

use crate::doc::RoomKind;

/// One footprint tier of a [`RoomStandard`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoomSize {
    /// Target area in square feet.
    pub area: f64,
    pub w: f64,
    pub h: f64,
    /// Typical area range, e.g. `"120-150 sq ft"`.
    pub description: &'static str,
}

/// Size tier selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    Minimal,
    Standard,
    Luxury,
}

/// Reference dimensions for one room kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoomStandard {
    pub kind: RoomKind,
    pub label: &'static str,
    pub category: &'static str,
    /// Generic kind used for styling.
    pub visual: RoomKind,
    pub minimal: RoomSize,
    pub standard: RoomSize,
    pub luxury: RoomSize,
    pub considerations: &'static str,
}

impl RoomStandard {
    #[must_use]
    pub fn size(&self, tier: SizeTier) -> RoomSize {
        match tier {
            SizeTier::Minimal => self.minimal,
            SizeTier::Standard => self.standard,
            SizeTier::Luxury => self.luxury,
        }
    }
}

const fn size(area: f64, w: f64, h: f64, description: &'static str) -> RoomSize {
    RoomSize { area, w, h, description }
}

/// The full catalog, in presentation order.
pub const ROOM_STANDARDS: &[RoomStandard] = &[
    RoomStandard {
        kind: RoomKind::MasterBedroom,
        label: "Primary/Master Bedroom",
        category: "Sleeping & Dressing",
        visual: RoomKind::MasterBedroom,
        minimal: size(140.0, 12.0, 12.0, "140 sq ft"),
        standard: size(210.0, 14.0, 15.0, "180-250 sq ft"),
        luxury: size(320.0, 16.0, 20.0, "250-400+ sq ft"),
        considerations: "Allows for King bed, nightstands, dresser, and potential seating area.",
    },
    RoomStandard {
        kind: RoomKind::Bedroom,
        label: "Standard Bedroom",
        category: "Guest/Child Sleeping",
        visual: RoomKind::Bedroom,
        minimal: size(100.0, 10.0, 10.0, "100 sq ft"),
        standard: size(144.0, 12.0, 12.0, "120-150 sq ft"),
        luxury: size(180.0, 12.0, 15.0, "150-200 sq ft"),
        considerations: "Space for Queen/Full bed, desk, and circulation.",
    },
    RoomStandard {
        kind: RoomKind::Nursery,
        label: "Small Bedroom/Nursery",
        category: "Minimal Sleeping",
        visual: RoomKind::Bedroom,
        minimal: size(70.0, 8.0, 9.0, "70 sq ft"),
        standard: size(100.0, 10.0, 10.0, "90-110 sq ft"),
        luxury: size(120.0, 10.0, 12.0, "110-130 sq ft"),
        considerations: "Must meet minimum building code requirements for egress and size.",
    },
    RoomStandard {
        kind: RoomKind::LivingFormal,
        label: "Formal Living Room",
        category: "Dedicated Seating Area",
        visual: RoomKind::Living,
        minimal: size(150.0, 12.0, 12.5, "150 sq ft"),
        standard: size(250.0, 15.0, 17.0, "200-300 sq ft"),
        luxury: size(375.0, 18.0, 21.0, "300-450 sq ft"),
        considerations: "Designed for formal entertaining; size depends on furniture scale.",
    },
    RoomStandard {
        kind: RoomKind::LivingFamily,
        label: "Family Room / Den",
        category: "Casual Seating & Media",
        visual: RoomKind::Living,
        minimal: size(120.0, 10.0, 12.0, "120 sq ft"),
        standard: size(220.0, 14.0, 16.0, "180-250 sq ft"),
        luxury: size(320.0, 16.0, 20.0, "250-400 sq ft"),
        considerations: "Focuses on comfort and media viewing; often adjacent to the kitchen.",
    },
    RoomStandard {
        kind: RoomKind::Dining,
        label: "Formal Dining Room",
        category: "Dedicated Eating Space",
        visual: RoomKind::Dining,
        minimal: size(120.0, 10.0, 12.0, "120 sq ft"),
        standard: size(180.0, 12.0, 15.0, "150-200 sq ft"),
        luxury: size(250.0, 15.0, 17.0, "200-300 sq ft"),
        considerations: "Requires 36 inches of clearance around the table for chair movement.",
    },
    RoomStandard {
        kind: RoomKind::BreakfastNook,
        label: "Breakfast Nook",
        category: "Informal Eating Area",
        visual: RoomKind::Dining,
        minimal: size(50.0, 7.0, 7.0, "50 sq ft"),
        standard: size(80.0, 9.0, 9.0, "70-100 sq ft"),
        luxury: size(120.0, 10.0, 12.0, "100-150 sq ft"),
        considerations: "Typically integrated into the kitchen or adjacent to it.",
    },
    RoomStandard {
        kind: RoomKind::KitchenGalley,
        label: "Galley Kitchen",
        category: "Minimal Counter Space",
        visual: RoomKind::Kitchen,
        minimal: size(70.0, 7.0, 10.0, "70 sq ft"),
        standard: size(90.0, 8.0, 11.0, "80-100 sq ft"),
        luxury: size(110.0, 9.0, 12.0, "100-120 sq ft"),
        considerations: "Single-aisle layout; highly efficient use of space.",
    },
    RoomStandard {
        kind: RoomKind::Kitchen,
        label: "U/L-Shape Kitchen",
        category: "Standard Work Triangle",
        visual: RoomKind::Kitchen,
        minimal: size(100.0, 10.0, 10.0, "100 sq ft"),
        standard: size(150.0, 12.0, 13.0, "120-180 sq ft"),
        luxury: size(220.0, 14.0, 16.0, "180-250 sq ft"),
        considerations: "Allows for comfortable work zones and potential small island.",
    },
    RoomStandard {
        kind: RoomKind::KitchenGourmet,
        label: "Gourmet/Eat-In Kitchen",
        category: "Large Island & Seating",
        visual: RoomKind::Kitchen,
        minimal: size(200.0, 14.0, 14.0, "200 sq ft"),
        standard: size(300.0, 17.0, 18.0, "250-350 sq ft"),
        luxury: size(450.0, 20.0, 23.0, "350-500+ sq ft"),
        considerations: "Includes multiple appliances, large island, and dedicated seating area.",
    },
    RoomStandard {
        kind: RoomKind::BathroomMaster,
        label: "Primary/Master Bathroom",
        category: "Luxury Fixtures",
        visual: RoomKind::Bathroom,
        minimal: size(80.0, 8.0, 10.0, "80 sq ft"),
        standard: size(130.0, 10.0, 13.0, "100-150 sq ft"),
        luxury: size(200.0, 14.0, 15.0, "150-250+ sq ft"),
        considerations: "Includes double vanity, separate shower, separate tub, and often a private toilet room.",
    },
    RoomStandard {
        kind: RoomKind::BathroomFull,
        label: "Full Bathroom",
        category: "Tub/Shower, Toilet, Sink",
        visual: RoomKind::Bathroom,
        minimal: size(40.0, 5.0, 8.0, "40 sq ft"),
        standard: size(60.0, 6.0, 10.0, "50-70 sq ft"),
        luxury: size(85.0, 8.0, 11.0, "70-100 sq ft"),
        considerations: "Standard three-fixture bath.",
    },
    RoomStandard {
        kind: RoomKind::BathroomThreeQuarter,
        label: "3/4 Bathroom",
        category: "Shower, Toilet, Sink",
        visual: RoomKind::Bathroom,
        minimal: size(35.0, 5.0, 7.0, "35 sq ft"),
        standard: size(50.0, 6.0, 8.5, "45-60 sq ft"),
        luxury: size(70.0, 7.0, 10.0, "60-80 sq ft"),
        considerations: "No bathtub; common in guest suites or basements.",
    },
    RoomStandard {
        kind: RoomKind::BathroomHalf,
        label: "Half Bathroom",
        category: "Toilet, Sink (Powder Room)",
        visual: RoomKind::Bathroom,
        minimal: size(18.0, 3.0, 6.0, "18 sq ft"),
        standard: size(30.0, 5.0, 6.0, "25-35 sq ft"),
        luxury: size(45.0, 6.0, 7.5, "35-50 sq ft"),
        considerations: "Minimal space required for door swing and standing.",
    },
    RoomStandard {
        kind: RoomKind::Study,
        label: "Home Office / Study",
        category: "Dedicated Work Space",
        visual: RoomKind::Study,
        minimal: size(80.0, 8.0, 10.0, "80 sq ft"),
        standard: size(120.0, 10.0, 12.0, "100-150 sq ft"),
        luxury: size(200.0, 14.0, 14.0, "150-250 sq ft"),
        considerations: "Space for desk, chair, filing, and potential built-in shelving.",
    },
    RoomStandard {
        kind: RoomKind::Laundry,
        label: "Laundry Room",
        category: "Washer/Dryer & Folding",
        visual: RoomKind::Utility,
        minimal: size(40.0, 5.0, 8.0, "40 sq ft"),
        standard: size(70.0, 7.0, 10.0, "60-80 sq ft"),
        luxury: size(100.0, 10.0, 10.0, "80-120 sq ft"),
        considerations: "Includes space for utility sink, cabinets, and folding counter.",
    },
    RoomStandard {
        kind: RoomKind::Pantry,
        label: "Walk-In Pantry",
        category: "Food Storage",
        visual: RoomKind::Storage,
        minimal: size(20.0, 4.0, 5.0, "20 sq ft"),
        standard: size(40.0, 5.0, 8.0, "30-50 sq ft"),
        luxury: size(65.0, 8.0, 8.0, "50-80 sq ft"),
        considerations: "Requires adequate shelving depth and circulation space.",
    },
    RoomStandard {
        kind: RoomKind::Mudroom,
        label: "Mudroom",
        category: "Transition & Storage",
        visual: RoomKind::Entrance,
        minimal: size(30.0, 5.0, 6.0, "30 sq ft"),
        standard: size(65.0, 8.0, 8.0, "50-80 sq ft"),
        luxury: size(100.0, 10.0, 10.0, "80-120 sq ft"),
        considerations: "Space for built-in lockers, bench, and coat/shoe storage.",
    },
    RoomStandard {
        kind: RoomKind::ClosetMaster,
        label: "Primary Walk-In Closet",
        category: "Master Storage",
        visual: RoomKind::Storage,
        minimal: size(60.0, 6.0, 10.0, "60 sq ft"),
        standard: size(100.0, 10.0, 10.0, "80-120 sq ft"),
        luxury: size(160.0, 12.0, 13.5, "120-200+ sq ft"),
        considerations: "Allows for hanging on both sides and a central dressing area or island.",
    },
    RoomStandard {
        kind: RoomKind::ClosetWalkin,
        label: "Standard Walk-In Closet",
        category: "Secondary Storage",
        visual: RoomKind::Storage,
        minimal: size(30.0, 5.0, 6.0, "30 sq ft"),
        standard: size(50.0, 7.0, 7.0, "40-60 sq ft"),
        luxury: size(70.0, 8.0, 9.0, "60-80 sq ft"),
        considerations: "Minimum 6 feet wide to allow hanging on both sides and circulation.",
    },
    RoomStandard {
        kind: RoomKind::ClosetLinen,
        label: "Linen Closet (Walk-In)",
        category: "Utility Storage",
        visual: RoomKind::Storage,
        minimal: size(15.0, 3.0, 5.0, "15 sq ft"),
        standard: size(25.0, 5.0, 5.0, "20-30 sq ft"),
        luxury: size(35.0, 5.0, 7.0, "30-40 sq ft"),
        considerations: "Primarily shelving space.",
    },
    RoomStandard {
        kind: RoomKind::Garage1Car,
        label: "Single Car Garage",
        category: "Parking & Minimal Storage",
        visual: RoomKind::Garage,
        minimal: size(200.0, 10.0, 20.0, "200 sq ft"),
        standard: size(270.0, 12.0, 22.5, "240-300 sq ft"),
        luxury: size(350.0, 14.0, 25.0, "300-400 sq ft"),
        considerations: "Standard minimum width is 10 feet, but 12-14 feet is more comfortable.",
    },
    RoomStandard {
        kind: RoomKind::Garage2Car,
        label: "Two Car Garage",
        category: "Parking & Storage",
        visual: RoomKind::Garage,
        minimal: size(400.0, 20.0, 20.0, "400 sq ft"),
        standard: size(484.0, 22.0, 22.0, "440-550 sq ft"),
        luxury: size(625.0, 25.0, 25.0, "550-700+ sq ft"),
        considerations: "Standard minimum width is 20 feet, but 22-24 feet is recommended.",
    },
    RoomStandard {
        kind: RoomKind::Garage3Car,
        label: "Three Car Garage",
        category: "Parking & Storage",
        visual: RoomKind::Garage,
        minimal: size(600.0, 30.0, 20.0, "600 sq ft"),
        standard: size(720.0, 30.0, 24.0, "660-800 sq ft"),
        luxury: size(900.0, 36.0, 25.0, "800-1000+ sq ft"),
        considerations: "Allows for three vehicles plus significant storage or workshop space.",
    },
];

/// Look up the catalog entry for a room kind.
#[must_use]
pub fn standard_for(kind: RoomKind) -> Option<&'static RoomStandard> {
    ROOM_STANDARDS.iter().find(|s| s.kind == kind)
}

/// Render the catalog as the plain-text briefing included in generation prompts.
#[must_use]
pub fn standards_context() -> String {
    let mut context = String::from("Standard Room Dimensions (width x height in feet):\n");
    for entry in ROOM_STANDARDS {
        context.push_str(&format!("- {} (type: '{}'):\n", entry.label, entry.kind.tag()));
        for (name, tier) in [("Minimal", entry.minimal), ("Standard", entry.standard), ("Luxury", entry.luxury)] {
            context.push_str(&format!("  * {name}: {}x{} (Area: {})\n", tier.w, tier.h, tier.area));
        }
        if !entry.considerations.is_empty() {
            context.push_str(&format!("  * Note: {}\n", entry.considerations));
        }
    }
    context
}
