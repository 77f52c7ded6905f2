use crate::req_atoms::*;
use crate::{DependentRegionGroup, RegionInfo, StaticConnection};

/// Every logical region: name, in-game scene, and whether it is isolated.
pub const REGIONS: &[RegionInfo] = &[
    RegionInfo {
        name: "Menu",
        scene: "Fake",
        isolated: true,
    },
    RegionInfo {
        name: "Overworld",
        scene: "Overworld Redux",
        isolated: false,
    },
    RegionInfo {
        name: "Overworld Holy Cross",
        scene: "Fake",
        isolated: true,
    },
    RegionInfo {
        name: "Overworld Belltower",
        scene: "Overworld Redux",
        isolated: false,
    },
    RegionInfo {
        name: "Overworld Laurels",
        scene: "Overworld Redux",
        isolated: false,
    },
    RegionInfo {
        name: "Overworld to West Garden from Furnace",
        scene: "Overworld Redux",
        isolated: false,
    },
    RegionInfo {
        name: "Overworld Well to Furnace Rail",
        scene: "Overworld Redux",
        isolated: false,
    },
    RegionInfo {
        name: "Overworld Ruined Hall Door",
        scene: "Overworld Redux",
        isolated: false,
    },
    RegionInfo {
        name: "Overworld Old House Door",
        scene: "Overworld Redux",
        isolated: false,
    },
    RegionInfo {
        name: "Overworld Southeast Cross Door",
        scene: "Overworld Redux",
        isolated: false,
    },
    RegionInfo {
        name: "Overworld Fountain Cross Door",
        scene: "Overworld Redux",
        isolated: false,
    },
    RegionInfo {
        name: "Overworld Temple Door",
        scene: "Overworld Redux",
        isolated: false,
    },
    RegionInfo {
        name: "Overworld Town Portal",
        scene: "Overworld Redux",
        isolated: false,
    },
    RegionInfo {
        name: "Overworld Spawn Portal",
        scene: "Overworld Redux",
        isolated: false,
    },
    RegionInfo {
        name: "Stick House",
        scene: "Sword Cave",
        isolated: true,
    },
    RegionInfo {
        name: "Windmill",
        scene: "Windmill",
        isolated: false,
    },
    RegionInfo {
        name: "Old House Back",
        scene: "Overworld Interiors",
        isolated: false,
    },
    RegionInfo {
        name: "Old House Front",
        scene: "Overworld Interiors",
        isolated: false,
    },
    RegionInfo {
        name: "Relic Tower",
        scene: "g_elements",
        isolated: true,
    },
    RegionInfo {
        name: "Furnace Fuse",
        scene: "Furnace",
        isolated: false,
    },
    RegionInfo {
        name: "Furnace Ladder Area",
        scene: "Furnace",
        isolated: false,
    },
    RegionInfo {
        name: "Furnace Walking Path",
        scene: "Furnace",
        isolated: false,
    },
    RegionInfo {
        name: "Secret Gathering Place",
        scene: "Waterfall",
        isolated: true,
    },
    RegionInfo {
        name: "Changing Room",
        scene: "Changing Room",
        isolated: true,
    },
    RegionInfo {
        name: "Patrol Cave",
        scene: "PatrolCave",
        isolated: true,
    },
    RegionInfo {
        name: "Ruined Shop",
        scene: "Ruined Shop",
        isolated: true,
    },
    RegionInfo {
        name: "Ruined Passage",
        scene: "Ruins Passage",
        isolated: false,
    },
    RegionInfo {
        name: "Special Shop",
        scene: "ShopSpecial",
        isolated: true,
    },
    RegionInfo {
        name: "Caustic Light Cave",
        scene: "Overworld Cave",
        isolated: true,
    },
    RegionInfo {
        name: "Maze Cave",
        scene: "Maze Room",
        isolated: true,
    },
    RegionInfo {
        name: "Cube Cave",
        scene: "CubeRoom",
        isolated: true,
    },
    RegionInfo {
        name: "Southeast Cross Room",
        scene: "EastFiligreeCache",
        isolated: true,
    },
    RegionInfo {
        name: "Fountain Cross Room",
        scene: "Town_FiligreeRoom",
        isolated: true,
    },
    RegionInfo {
        name: "Hourglass Cave",
        scene: "Town Basement",
        isolated: true,
    },
    RegionInfo {
        name: "Sealed Temple",
        scene: "Temple",
        isolated: false,
    },
    RegionInfo {
        name: "Sealed Temple Rafters",
        scene: "Temple",
        isolated: false,
    },
    RegionInfo {
        name: "Forest Belltower Upper",
        scene: "Forest Belltower",
        isolated: false,
    },
    RegionInfo {
        name: "Forest Belltower Main",
        scene: "Forest Belltower",
        isolated: false,
    },
    RegionInfo {
        name: "Forest Belltower Lower",
        scene: "Forest Belltower",
        isolated: false,
    },
    RegionInfo {
        name: "East Forest",
        scene: "East Forest Redux",
        isolated: false,
    },
    RegionInfo {
        name: "East Forest Dance Fox Spot",
        scene: "East Forest Redux",
        isolated: false,
    },
    RegionInfo {
        name: "East Forest Portal",
        scene: "East Forest Redux",
        isolated: false,
    },
    RegionInfo {
        name: "Guard House 1 East",
        scene: "East Forest Redux Laddercave",
        isolated: false,
    },
    RegionInfo {
        name: "Guard House 1 West",
        scene: "East Forest Redux Laddercave",
        isolated: false,
    },
    RegionInfo {
        name: "Guard House 2",
        scene: "East Forest Redux Interior",
        isolated: false,
    },
    RegionInfo {
        name: "Forest Boss Room",
        scene: "Forest Boss Room",
        isolated: false,
    },
    RegionInfo {
        name: "Forest Grave Path Main",
        scene: "Sword Access",
        isolated: false,
    },
    RegionInfo {
        name: "Forest Grave Path Upper",
        scene: "Sword Access",
        isolated: false,
    },
    RegionInfo {
        name: "Forest Grave Path by Grave",
        scene: "Sword Access",
        isolated: false,
    },
    RegionInfo {
        name: "Forest Hero's Grave",
        scene: "Sword Access",
        isolated: false,
    },
    RegionInfo {
        name: "Dark Tomb Entry Point",
        scene: "Crypt Redux",
        isolated: false,
    },
    RegionInfo {
        name: "Dark Tomb Main",
        scene: "Crypt Redux",
        isolated: false,
    },
    RegionInfo {
        name: "Dark Tomb Dark Exit",
        scene: "Crypt Redux",
        isolated: false,
    },
    RegionInfo {
        name: "Dark Tomb Checkpoint",
        scene: "Sewer_Boss",
        isolated: false,
    },
    RegionInfo {
        name: "Well Boss",
        scene: "Sewer_Boss",
        isolated: false,
    },
    RegionInfo {
        name: "Bottom of the Well Front",
        scene: "Sewer",
        isolated: false,
    },
    RegionInfo {
        name: "Bottom of the Well Back",
        scene: "Sewer",
        isolated: false,
    },
    RegionInfo {
        name: "West Garden",
        scene: "Archipelagos Redux",
        isolated: false,
    },
    RegionInfo {
        name: "Magic Dagger House",
        scene: "archipelagos_house",
        isolated: true,
    },
    RegionInfo {
        name: "West Garden Portal Area",
        scene: "Archipelagos Redux",
        isolated: true,
    },
    RegionInfo {
        name: "West Garden Laurels Exit",
        scene: "Archipelagos Redux",
        isolated: false,
    },
    RegionInfo {
        name: "West Garden after Boss",
        scene: "Archipelagos Redux",
        isolated: false,
    },
    RegionInfo {
        name: "West Garden Hero's Grave",
        scene: "Archipelagos Redux",
        isolated: false,
    },
    RegionInfo {
        name: "Ruined Atoll",
        scene: "Atoll Redux",
        isolated: false,
    },
    RegionInfo {
        name: "Ruined Atoll Lower Entry Area",
        scene: "Atoll Redux",
        isolated: false,
    },
    RegionInfo {
        name: "Ruined Atoll Frog Mouth",
        scene: "Atoll Redux",
        isolated: false,
    },
    RegionInfo {
        name: "Ruined Atoll Portal",
        scene: "Atoll Redux",
        isolated: false,
    },
    RegionInfo {
        name: "Frog's Domain Entry",
        scene: "Frog Stairs",
        isolated: false,
    },
    RegionInfo {
        name: "Frog's Domain",
        scene: "frog cave main",
        isolated: false,
    },
    RegionInfo {
        name: "Frog's Domain Back",
        scene: "frog cave main",
        isolated: false,
    },
    RegionInfo {
        name: "Library Exterior Tree",
        scene: "Library Exterior",
        isolated: false,
    },
    RegionInfo {
        name: "Library Exterior Ladder",
        scene: "Library Exterior",
        isolated: false,
    },
    RegionInfo {
        name: "Library Hall",
        scene: "Library Hall",
        isolated: false,
    },
    RegionInfo {
        name: "Library Hero's Grave",
        scene: "Library Hall",
        isolated: false,
    },
    RegionInfo {
        name: "Library Rotunda",
        scene: "Library Rotunda",
        isolated: false,
    },
    RegionInfo {
        name: "Library Lab",
        scene: "Library Lab",
        isolated: false,
    },
    RegionInfo {
        name: "Library Lab Lower",
        scene: "Library Lab",
        isolated: false,
    },
    RegionInfo {
        name: "Library Portal",
        scene: "Library Lab",
        isolated: false,
    },
    RegionInfo {
        name: "Library Arena",
        scene: "Library Arena",
        isolated: true,
    },
    RegionInfo {
        name: "Fortress Exterior from East Forest",
        scene: "Fortress Courtyard",
        isolated: false,
    },
    RegionInfo {
        name: "Fortress Exterior from Overworld",
        scene: "Fortress Courtyard",
        isolated: false,
    },
    RegionInfo {
        name: "Fortress Exterior near cave",
        scene: "Fortress Courtyard",
        isolated: false,
    },
    RegionInfo {
        name: "Fortress Courtyard",
        scene: "Fortress Courtyard",
        isolated: false,
    },
    RegionInfo {
        name: "Fortress Courtyard Upper",
        scene: "Fortress Courtyard",
        isolated: false,
    },
    RegionInfo {
        name: "Beneath the Vault Front",
        scene: "Fortress Basement",
        isolated: false,
    },
    RegionInfo {
        name: "Beneath the Vault Back",
        scene: "Fortress Basement",
        isolated: false,
    },
    RegionInfo {
        name: "Eastern Vault Fortress",
        scene: "Fortress Main",
        isolated: false,
    },
    RegionInfo {
        name: "Eastern Vault Fortress Gold Door",
        scene: "Fortress Main",
        isolated: false,
    },
    RegionInfo {
        name: "Fortress East Shortcut Upper",
        scene: "Fortress East",
        isolated: false,
    },
    RegionInfo {
        name: "Fortress East Shortcut Lower",
        scene: "Fortress East",
        isolated: false,
    },
    RegionInfo {
        name: "Fortress Grave Path",
        scene: "Fortress Reliquary",
        isolated: false,
    },
    RegionInfo {
        name: "Fortress Grave Path Upper",
        scene: "Fortress Reliquary",
        isolated: true,
    },
    RegionInfo {
        name: "Fortress Grave Path Dusty Entrance",
        scene: "Fortress Reliquary",
        isolated: false,
    },
    RegionInfo {
        name: "Fortress Hero's Grave",
        scene: "Fortress Reliquary",
        isolated: false,
    },
    RegionInfo {
        name: "Fortress Leaf Piles",
        scene: "Dusty",
        isolated: true,
    },
    RegionInfo {
        name: "Fortress Arena",
        scene: "Fortress Arena",
        isolated: false,
    },
    RegionInfo {
        name: "Fortress Arena Portal",
        scene: "Fortress Arena",
        isolated: false,
    },
    RegionInfo {
        name: "Lower Mountain",
        scene: "Mountain",
        isolated: false,
    },
    RegionInfo {
        name: "Lower Mountain Stairs",
        scene: "Mountain",
        isolated: false,
    },
    RegionInfo {
        name: "Top of the Mountain",
        scene: "Mountaintop",
        isolated: true,
    },
    RegionInfo {
        name: "Quarry Connector",
        scene: "Darkwoods Tunnel",
        isolated: false,
    },
    RegionInfo {
        name: "Quarry",
        scene: "Quarry Redux",
        isolated: false,
    },
    RegionInfo {
        name: "Quarry Portal",
        scene: "Quarry Redux",
        isolated: false,
    },
    RegionInfo {
        name: "Monastery Front",
        scene: "Monastery",
        isolated: false,
    },
    RegionInfo {
        name: "Monastery Back",
        scene: "Monastery",
        isolated: false,
    },
    RegionInfo {
        name: "Monastery Hero's Grave",
        scene: "Monastery",
        isolated: false,
    },
    RegionInfo {
        name: "Monastery Rope",
        scene: "Quarry Redux",
        isolated: false,
    },
    RegionInfo {
        name: "Lower Quarry",
        scene: "Quarry Redux",
        isolated: false,
    },
    RegionInfo {
        name: "Lower Quarry Zig Door",
        scene: "Quarry Redux",
        isolated: false,
    },
    RegionInfo {
        name: "Rooted Ziggurat Entry",
        scene: "ziggurat2020_0",
        isolated: false,
    },
    RegionInfo {
        name: "Rooted Ziggurat Upper Front",
        scene: "ziggurat2020_1",
        isolated: false,
    },
    RegionInfo {
        name: "Rooted Ziggurat Upper Back",
        scene: "ziggurat2020_1",
        isolated: false,
    },
    RegionInfo {
        name: "Rooted Ziggurat Middle Top",
        scene: "ziggurat2020_2",
        isolated: false,
    },
    RegionInfo {
        name: "Rooted Ziggurat Middle Bottom",
        scene: "ziggurat2020_2",
        isolated: false,
    },
    RegionInfo {
        name: "Rooted Ziggurat Lower Front",
        scene: "ziggurat2020_3",
        isolated: false,
    },
    RegionInfo {
        name: "Rooted Ziggurat Lower Back",
        scene: "ziggurat2020_3",
        isolated: false,
    },
    RegionInfo {
        name: "Rooted Ziggurat Portal Room Entrance",
        scene: "ziggurat2020_3",
        isolated: false,
    },
    RegionInfo {
        name: "Rooted Ziggurat Portal",
        scene: "ziggurat2020_FTRoom",
        isolated: false,
    },
    RegionInfo {
        name: "Rooted Ziggurat Portal Room Exit",
        scene: "ziggurat2020_FTRoom",
        isolated: false,
    },
    RegionInfo {
        name: "Swamp",
        scene: "Swamp Redux 2",
        isolated: false,
    },
    RegionInfo {
        name: "Swamp to Cathedral Treasure Room",
        scene: "Swamp Redux 2",
        isolated: false,
    },
    RegionInfo {
        name: "Swamp to Cathedral Main Entrance",
        scene: "Swamp Redux 2",
        isolated: false,
    },
    RegionInfo {
        name: "Back of Swamp",
        scene: "Swamp Redux 2",
        isolated: false,
    },
    RegionInfo {
        name: "Swamp Hero's Grave",
        scene: "Swamp Redux 2",
        isolated: false,
    },
    RegionInfo {
        name: "Back of Swamp Laurels Area",
        scene: "Swamp Redux 2",
        isolated: false,
    },
    RegionInfo {
        name: "Cathedral",
        scene: "Cathedral Redux",
        isolated: false,
    },
    RegionInfo {
        name: "Cathedral Secret Legend Room",
        scene: "Cathedral Redux",
        isolated: true,
    },
    RegionInfo {
        name: "Cathedral Gauntlet Checkpoint",
        scene: "Cathedral Arena",
        isolated: false,
    },
    RegionInfo {
        name: "Cathedral Gauntlet",
        scene: "Cathedral Arena",
        isolated: false,
    },
    RegionInfo {
        name: "Cathedral Gauntlet Exit",
        scene: "Cathedral Arena",
        isolated: false,
    },
    RegionInfo {
        name: "Far Shore",
        scene: "Transit",
        isolated: false,
    },
    RegionInfo {
        name: "Far Shore to Spawn",
        scene: "Transit",
        isolated: false,
    },
    RegionInfo {
        name: "Far Shore to East Forest",
        scene: "Transit",
        isolated: false,
    },
    RegionInfo {
        name: "Far Shore to Quarry",
        scene: "Transit",
        isolated: false,
    },
    RegionInfo {
        name: "Far Shore to Fortress",
        scene: "Transit",
        isolated: false,
    },
    RegionInfo {
        name: "Far Shore to Library",
        scene: "Transit",
        isolated: false,
    },
    RegionInfo {
        name: "Far Shore to West Garden",
        scene: "Transit",
        isolated: false,
    },
    RegionInfo {
        name: "Hero Relic - Fortress",
        scene: "RelicVoid",
        isolated: true,
    },
    RegionInfo {
        name: "Hero Relic - Quarry",
        scene: "RelicVoid",
        isolated: true,
    },
    RegionInfo {
        name: "Hero Relic - West Garden",
        scene: "RelicVoid",
        isolated: true,
    },
    RegionInfo {
        name: "Hero Relic - East Forest",
        scene: "RelicVoid",
        isolated: true,
    },
    RegionInfo {
        name: "Hero Relic - Library",
        scene: "RelicVoid",
        isolated: true,
    },
    RegionInfo {
        name: "Hero Relic - Swamp",
        scene: "RelicVoid",
        isolated: true,
    },
    RegionInfo {
        name: "Purgatory",
        scene: "Purgatory",
        isolated: false,
    },
    RegionInfo {
        name: "Shop",
        scene: "Shop",
        isolated: true,
    },
    // Placeholder regions for the shop portals created during entrance shuffling:
    RegionInfo {
        name: "Shop Entrance 1",
        scene: "Shop",
        isolated: true,
    },
    RegionInfo {
        name: "Shop Entrance 2",
        scene: "Shop",
        isolated: true,
    },
    RegionInfo {
        name: "Shop Entrance 3",
        scene: "Shop",
        isolated: true,
    },
    RegionInfo {
        name: "Shop Entrance 4",
        scene: "Shop",
        isolated: true,
    },
    RegionInfo {
        name: "Shop Entrance 5",
        scene: "Shop",
        isolated: true,
    },
    RegionInfo {
        name: "Shop Entrance 6",
        scene: "Shop",
        isolated: true,
    },
    RegionInfo {
        name: "Spirit Arena",
        scene: "Spirit Arena",
        isolated: true,
    },
    RegionInfo {
        name: "Spirit Arena Victory",
        scene: "Spirit Arena",
        isolated: true,
    },
];

pub const STATIC_CONNECTIONS: &[StaticConnection] = &[
    StaticConnection {
        origin: "Menu",
        destination: "Overworld",
        requirement: &[],
        region_requirement: &[],
        reverse: false,
    },
    StaticConnection {
        origin: "Overworld Belltower",
        destination: "Overworld",
        requirement: &[],
        region_requirement: &[],
        reverse: false,
    },
    StaticConnection {
        origin: "Overworld",
        destination: "Overworld Belltower",
        requirement: &[&[LAURELS]],
        region_requirement: &[],
        reverse: false,
    },
    StaticConnection {
        origin: "Overworld",
        destination: "Overworld Holy Cross",
        requirement: &[&[HOLY_CROSS]],
        region_requirement: &[],
        reverse: false,
    },
    StaticConnection {
        origin: "Overworld",
        destination: "Overworld Ruined Hall Door",
        requirement: &[&[KEY]],
        region_requirement: &[],
        reverse: false,
    },
    StaticConnection {
        origin: "Overworld Laurels",
        destination: "Overworld",
        requirement: &[&[LAURELS]],
        region_requirement: &[],
        reverse: true,
    },
    StaticConnection {
        origin: "Overworld",
        destination: "Overworld Old House Door",
        requirement: &[&[HOUSE_KEY]],
        region_requirement: &[],
        reverse: false,
    },
    StaticConnection {
        origin: "Overworld Southeast Cross Door",
        destination: "Overworld",
        requirement: &[&[HOLY_CROSS]],
        region_requirement: &[],
        reverse: true,
    },
    StaticConnection {
        origin: "Overworld Fountain Cross Door",
        destination: "Overworld",
        requirement: &[],
        region_requirement: &[],
        reverse: false,
    },
    StaticConnection {
        origin: "Overworld",
        destination: "Overworld Fountain Cross Door",
        requirement: &[&[HOLY_CROSS]],
        region_requirement: &[],
        reverse: false,
    },
    StaticConnection {
        origin: "Overworld Town Portal",
        destination: "Overworld",
        requirement: &[],
        region_requirement: &[],
        reverse: false,
    },
    StaticConnection {
        origin: "Overworld",
        destination: "Overworld Town Portal",
        requirement: &[&[PRAYER]],
        region_requirement: &[],
        reverse: false,
    },
    StaticConnection {
        origin: "Overworld Spawn Portal",
        destination: "Overworld",
        requirement: &[],
        region_requirement: &[],
        reverse: false,
    },
    StaticConnection {
        origin: "Overworld",
        destination: "Overworld Spawn Portal",
        requirement: &[&[PRAYER]],
        region_requirement: &[],
        reverse: false,
    },
    StaticConnection {
        origin: "Overworld Temple Door",
        destination: "Overworld",
        requirement: &[&[STICK], &[FIRE_WAND]],
        region_requirement: &["Overworld Belltower", "Forest Belltower Upper"],
        reverse: true,
    },
    StaticConnection {
        origin: "Old House Front",
        destination: "Old House Back",
        requirement: &[],
        region_requirement: &[],
        reverse: false,
    },
    StaticConnection {
        origin: "Sealed Temple",
        destination: "Sealed Temple Rafters",
        requirement: &[],
        region_requirement: &[],
        reverse: false,
    },
    StaticConnection {
        origin: "Sealed Temple Rafters",
        destination: "Sealed Temple",
        requirement: &[&[LAURELS]],
        region_requirement: &[],
        reverse: false,
    },
    StaticConnection {
        origin: "Furnace Ladder Area",
        destination: "Furnace Walking Path",
        requirement: &[&[LAURELS]],
        region_requirement: &[],
        reverse: true,
    },
    StaticConnection {
        origin: "Furnace Ladder Area",
        destination: "Furnace Fuse",
        requirement: &[&[LAURELS]],
        region_requirement: &[],
        reverse: true,
    },
    StaticConnection {
        origin: "Furnace Fuse",
        destination: "Furnace Walking Path",
        requirement: &[&[LAURELS]],
        region_requirement: &[],
        reverse: true,
    },
    StaticConnection {
        origin: "Forest Belltower Upper",
        destination: "Forest Belltower Main",
        requirement: &[],
        region_requirement: &[],
        reverse: false,
    },
    StaticConnection {
        origin: "Forest Belltower Main",
        destination: "Forest Belltower Lower",
        requirement: &[],
        region_requirement: &[],
        reverse: false,
    },
    StaticConnection {
        origin: "East Forest",
        destination: "East Forest Dance Fox Spot",
        requirement: &[&[LAURELS]],
        region_requirement: &[],
        reverse: true,
    },
    StaticConnection {
        origin: "East Forest",
        destination: "East Forest Portal",
        requirement: &[&[PRAYER]],
        region_requirement: &[],
        reverse: false,
    },
    StaticConnection {
        origin: "East Forest Portal",
        destination: "East Forest",
        requirement: &[],
        region_requirement: &[],
        reverse: false,
    },
    StaticConnection {
        origin: "Guard House 1 East",
        destination: "Guard House 1 West",
        requirement: &[],
        region_requirement: &[],
        reverse: false,
    },
    StaticConnection {
        origin: "Guard House 1 West",
        destination: "Guard House 1 East",
        requirement: &[&[LAURELS]],
        region_requirement: &[],
        reverse: false,
    },
    StaticConnection {
        origin: "Forest Grave Path Upper",
        destination: "Forest Grave Path Main",
        requirement: &[&[LAURELS]],
        region_requirement: &[],
        reverse: true,
    },
    StaticConnection {
        origin: "Forest Grave Path Main",
        destination: "Forest Grave Path by Grave",
        requirement: &[],
        region_requirement: &[],
        reverse: false,
    },
    StaticConnection {
        origin: "Forest Grave Path by Grave",
        destination: "Forest Hero's Grave",
        requirement: &[&[PRAYER]],
        region_requirement: &[],
        reverse: false,
    },
    StaticConnection {
        origin: "Forest Hero's Grave",
        destination: "Forest Grave Path by Grave",
        requirement: &[],
        region_requirement: &[],
        reverse: false,
    },
    StaticConnection {
        origin: "Bottom of the Well Front",
        destination: "Bottom of the Well Back",
        requirement: &[&[STICK]],
        region_requirement: &[],
        reverse: true,
    },
    StaticConnection {
        origin: "Well Boss",
        destination: "Dark Tomb Checkpoint",
        requirement: &[],
        region_requirement: &[],
        reverse: false,
    },
    StaticConnection {
        origin: "Dark Tomb Checkpoint",
        destination: "Well Boss",
        requirement: &[&[LAURELS]],
        region_requirement: &[],
        reverse: false,
    },
    StaticConnection {
        origin: "Dark Tomb Entry Point",
        destination: "Dark Tomb Main",
        requirement: &[&[LANTERN]],
        region_requirement: &[],
        reverse: true,
    },
    StaticConnection {
        origin: "Dark Tomb Main",
        destination: "Dark Tomb Dark Exit",
        requirement: &[&[LANTERN]],
        region_requirement: &[],
        reverse: true,
    },
    StaticConnection {
        origin: "West Garden Laurels Exit",
        destination: "West Garden",
        requirement: &[&[LAURELS]],
        region_requirement: &[],
        reverse: true,
    },
    StaticConnection {
        origin: "West Garden after Boss",
        destination: "West Garden",
        requirement: &[&[LAURELS]],
        region_requirement: &[],
        reverse: false,
    },
    StaticConnection {
        origin: "West Garden",
        destination: "West Garden after Boss",
        requirement: &[&[LAURELS], &[SWORD]],
        region_requirement: &[],
        reverse: false,
    },
    StaticConnection {
        origin: "West Garden",
        destination: "West Garden Hero's Grave",
        requirement: &[&[PRAYER]],
        region_requirement: &[],
        reverse: false,
    },
    StaticConnection {
        origin: "West Garden Hero's Grave",
        destination: "West Garden",
        requirement: &[],
        region_requirement: &[],
        reverse: false,
    },
    StaticConnection {
        origin: "Ruined Atoll",
        destination: "Ruined Atoll Lower Entry Area",
        requirement: &[&[LAURELS]],
        region_requirement: &[],
        reverse: false,
    },
    StaticConnection {
        origin: "Ruined Atoll Frog Mouth",
        destination: "Ruined Atoll",
        requirement: &[&[LAURELS], &[GRAPPLE]],
        region_requirement: &[],
        reverse: true,
    },
    StaticConnection {
        origin: "Ruined Atoll Lower Entry Area",
        destination: "Ruined Atoll",
        requirement: &[&[LAURELS], &[GRAPPLE]],
        region_requirement: &[],
        reverse: true,
    },
    StaticConnection {
        origin: "Ruined Atoll",
        destination: "Ruined Atoll Portal",
        requirement: &[&[PRAYER]],
        region_requirement: &[],
        reverse: false,
    },
    StaticConnection {
        origin: "Ruined Atoll Portal",
        destination: "Ruined Atoll",
        requirement: &[],
        region_requirement: &[],
        reverse: false,
    },
    StaticConnection {
        origin: "Frog's Domain",
        destination: "Frog's Domain Back",
        requirement: &[&[GRAPPLE]],
        region_requirement: &[],
        reverse: false,
    },
    StaticConnection {
        origin: "Library Exterior Tree",
        destination: "Library Exterior Ladder",
        requirement: &[&[GRAPPLE], &[LAURELS]],
        region_requirement: &[],
        reverse: false,
    },
    StaticConnection {
        origin: "Library Exterior Ladder",
        destination: "Library Exterior Tree",
        requirement: &[&[GRAPPLE, PRAYER], &[LAURELS, PRAYER]],
        region_requirement: &[],
        reverse: false,
    },
    StaticConnection {
        origin: "Library Hall",
        destination: "Library Hero's Grave",
        requirement: &[&[PRAYER]],
        region_requirement: &[],
        reverse: false,
    },
    StaticConnection {
        origin: "Library Hero's Grave",
        destination: "Library Hall",
        requirement: &[],
        region_requirement: &[],
        reverse: false,
    },
    StaticConnection {
        origin: "Library Lab Lower",
        destination: "Library Lab",
        requirement: &[&[LAURELS], &[GRAPPLE]],
        region_requirement: &[],
        reverse: false,
    },
    StaticConnection {
        origin: "Library Lab",
        destination: "Library Lab Lower",
        requirement: &[&[LAURELS]],
        region_requirement: &[],
        reverse: false,
    },
    StaticConnection {
        origin: "Library Lab",
        destination: "Library Portal",
        requirement: &[&[PRAYER]],
        region_requirement: &[],
        reverse: false,
    },
    StaticConnection {
        origin: "Library Portal",
        destination: "Library Lab",
        requirement: &[],
        region_requirement: &[],
        reverse: false,
    },
    StaticConnection {
        origin: "Fortress Exterior from East Forest",
        destination: "Fortress Exterior from Overworld",
        requirement: &[&[LAURELS], &[GRAPPLE]],
        region_requirement: &[],
        reverse: false,
    },
    StaticConnection {
        origin: "Fortress Exterior from Overworld",
        destination: "Fortress Exterior from East Forest",
        requirement: &[&[LAURELS]],
        region_requirement: &[],
        reverse: false,
    },
    StaticConnection {
        origin: "Fortress Exterior from Overworld",
        destination: "Fortress Exterior near cave",
        requirement: &[&[LAURELS], &[PRAYER]],
        region_requirement: &[],
        reverse: false,
    },
    StaticConnection {
        origin: "Fortress Exterior near cave",
        destination: "Fortress Exterior from Overworld",
        requirement: &[&[LAURELS]],
        region_requirement: &[],
        reverse: false,
    },
    StaticConnection {
        origin: "Fortress Exterior from Overworld",
        destination: "Fortress Courtyard",
        requirement: &[&[LAURELS]],
        region_requirement: &[],
        reverse: true,
    },
    StaticConnection {
        origin: "Fortress Courtyard Upper",
        destination: "Fortress Courtyard",
        requirement: &[],
        region_requirement: &[],
        reverse: false,
    },
    StaticConnection {
        origin: "Fortress Courtyard Upper",
        destination: "Fortress Exterior from Overworld",
        requirement: &[],
        region_requirement: &[],
        reverse: false,
    },
    StaticConnection {
        origin: "Beneath the Vault Front",
        destination: "Beneath the Vault Back",
        requirement: &[&[LANTERN]],
        region_requirement: &[],
        reverse: false,
    },
    StaticConnection {
        origin: "Beneath the Vault Back",
        destination: "Beneath the Vault Front",
        requirement: &[],
        region_requirement: &[],
        reverse: false,
    },
    StaticConnection {
        origin: "Fortress East Shortcut Upper",
        destination: "Fortress East Shortcut Lower",
        requirement: &[],
        region_requirement: &[],
        reverse: false,
    },
    StaticConnection {
        origin: "Eastern Vault Fortress",
        destination: "Eastern Vault Fortress Gold Door",
        requirement: &[&[PRAYER]],
        region_requirement: &["Fortress Exterior from Overworld", "Fortress Courtyard Upper", "Beneath the Vault Back", "Eastern Vault Fortress"],
        reverse: true,
    },
    StaticConnection {
        origin: "Fortress Grave Path",
        destination: "Fortress Grave Path Dusty Entrance",
        requirement: &[&[LAURELS]],
        region_requirement: &[],
        reverse: true,
    },
    StaticConnection {
        origin: "Fortress Grave Path",
        destination: "Fortress Hero's Grave",
        requirement: &[&[PRAYER]],
        region_requirement: &[],
        reverse: false,
    },
    StaticConnection {
        origin: "Fortress Hero's Grave",
        destination: "Fortress Grave Path",
        requirement: &[],
        region_requirement: &[],
        reverse: false,
    },
    StaticConnection {
        origin: "Fortress Arena",
        destination: "Fortress Arena Portal",
        requirement: &[&[PRAYER]],
        region_requirement: &["Fortress Exterior from Overworld", "Beneath the Vault Back", "Eastern Vault Fortress"],
        reverse: false,
    },
    StaticConnection {
        origin: "Fortress Arena Portal",
        destination: "Fortress Arena",
        requirement: &[],
        region_requirement: &[],
        reverse: false,
    },
    StaticConnection {
        origin: "Lower Mountain",
        destination: "Lower Mountain Stairs",
        requirement: &[&[HOLY_CROSS]],
        region_requirement: &[],
        reverse: true,
    },
    StaticConnection {
        origin: "Quarry",
        destination: "Lower Quarry",
        requirement: &[&[MASK, SWORD], &[MASK, FIRE_WAND]],
        region_requirement: &[],
        reverse: true,
    },
    StaticConnection {
        origin: "Quarry",
        destination: "Quarry Portal",
        requirement: &[&[PRAYER, GRAPPLE]],
        region_requirement: &["Quarry Connector"],
        reverse: false,
    },
    StaticConnection {
        origin: "Quarry Portal",
        destination: "Quarry",
        requirement: &[],
        region_requirement: &[],
        reverse: false,
    },
    StaticConnection {
        origin: "Lower Quarry",
        destination: "Lower Quarry Zig Door",
        requirement: &[&[GRAPPLE, PRAYER]],
        region_requirement: &["Quarry Connector", "Quarry"],
        reverse: true,
    },
    StaticConnection {
        origin: "Monastery Rope",
        destination: "Quarry",
        requirement: &[],
        region_requirement: &[],
        reverse: false,
    },
    StaticConnection {
        origin: "Monastery Front",
        destination: "Monastery Back",
        requirement: &[],
        region_requirement: &[],
        reverse: false,
    },
    StaticConnection {
        origin: "Monastery Back",
        destination: "Monastery Front",
        requirement: &[&[LAURELS]],
        region_requirement: &[],
        reverse: false,
    },
    StaticConnection {
        origin: "Monastery Back",
        destination: "Monastery Hero's Grave",
        requirement: &[&[PRAYER]],
        region_requirement: &[],
        reverse: false,
    },
    StaticConnection {
        origin: "Monastery Hero's Grave",
        destination: "Monastery Back",
        requirement: &[],
        region_requirement: &[],
        reverse: false,
    },
    StaticConnection {
        origin: "Rooted Ziggurat Upper Front",
        destination: "Rooted Ziggurat Upper Back",
        requirement: &[&[LAURELS], &[SWORD]],
        region_requirement: &[],
        reverse: false,
    },
    StaticConnection {
        origin: "Rooted Ziggurat Upper Back",
        destination: "Rooted Ziggurat Upper Front",
        requirement: &[&[LAURELS]],
        region_requirement: &[],
        reverse: false,
    },
    StaticConnection {
        origin: "Rooted Ziggurat Middle Top",
        destination: "Rooted Ziggurat Middle Bottom",
        requirement: &[],
        region_requirement: &[],
        reverse: false,
    },
    StaticConnection {
        origin: "Rooted Ziggurat Lower Front",
        destination: "Rooted Ziggurat Lower Back",
        requirement: &[&[LAURELS], &[SWORD, PRAYER]],
        region_requirement: &[],
        reverse: false,
    },
    StaticConnection {
        origin: "Rooted Ziggurat Lower Back",
        destination: "Rooted Ziggurat Lower Front",
        requirement: &[&[LAURELS]],
        region_requirement: &[],
        reverse: false,
    },
    StaticConnection {
        origin: "Rooted Ziggurat Lower Back",
        destination: "Rooted Ziggurat Portal Room Entrance",
        requirement: &[&[PRAYER]],
        region_requirement: &[],
        reverse: false,
    },
    StaticConnection {
        origin: "Rooted Ziggurat Portal Room Entrance",
        destination: "Rooted Ziggurat Lower Back",
        requirement: &[],
        region_requirement: &[],
        reverse: false,
    },
    StaticConnection {
        origin: "Rooted Ziggurat Portal",
        destination: "Rooted Ziggurat Portal Room Exit",
        requirement: &[&[PRAYER]],
        region_requirement: &["Rooted Ziggurat Lower Back"],
        reverse: false,
    },
    StaticConnection {
        origin: "Rooted Ziggurat Portal Room Exit",
        destination: "Rooted Ziggurat Portal",
        requirement: &[&[PRAYER]],
        region_requirement: &[],
        reverse: false,
    },
    StaticConnection {
        origin: "Swamp",
        destination: "Swamp to Cathedral Main Entrance",
        requirement: &[&[PRAYER]],
        region_requirement: &["Overworld Laurels", "Swamp"],
        reverse: true,
    },
    StaticConnection {
        origin: "Swamp",
        destination: "Swamp to Cathedral Treasure Room",
        requirement: &[&[HOLY_CROSS]],
        region_requirement: &[],
        reverse: false,
    },
    StaticConnection {
        origin: "Swamp to Cathedral Treasure Room",
        destination: "Swamp",
        requirement: &[],
        region_requirement: &[],
        reverse: false,
    },
    StaticConnection {
        origin: "Back of Swamp",
        destination: "Back of Swamp Laurels Area",
        requirement: &[&[LAURELS]],
        region_requirement: &[],
        reverse: true,
    },
    StaticConnection {
        origin: "Back of Swamp",
        destination: "Swamp Hero's Grave",
        requirement: &[&[PRAYER]],
        region_requirement: &[],
        reverse: false,
    },
    StaticConnection {
        origin: "Swamp Hero's Grave",
        destination: "Back of Swamp",
        requirement: &[],
        region_requirement: &[],
        reverse: false,
    },
    StaticConnection {
        origin: "Cathedral Gauntlet Checkpoint",
        destination: "Cathedral Gauntlet",
        requirement: &[],
        region_requirement: &[],
        reverse: false,
    },
    StaticConnection {
        origin: "Cathedral Gauntlet",
        destination: "Cathedral Gauntlet Exit",
        requirement: &[&[LAURELS]],
        region_requirement: &[],
        reverse: true,
    },
    StaticConnection {
        origin: "Far Shore",
        destination: "Far Shore to Spawn",
        requirement: &[&[LAURELS]],
        region_requirement: &[],
        reverse: true,
    },
    StaticConnection {
        origin: "Far Shore",
        destination: "Far Shore to East Forest",
        requirement: &[&[LAURELS]],
        region_requirement: &[],
        reverse: true,
    },
    StaticConnection {
        origin: "Far Shore",
        destination: "Far Shore to West Garden",
        requirement: &[&[PRAYER]],
        region_requirement: &["West Garden"],
        reverse: false,
    },
    StaticConnection {
        origin: "Far Shore to West Garden",
        destination: "Far Shore",
        requirement: &[],
        region_requirement: &[],
        reverse: false,
    },
    StaticConnection {
        origin: "Far Shore",
        destination: "Far Shore to Quarry",
        requirement: &[&[PRAYER, GRAPPLE]],
        region_requirement: &["Quarry", "Quarry Connector"],
        reverse: false,
    },
    StaticConnection {
        origin: "Far Shore to Quarry",
        destination: "Far Shore",
        requirement: &[],
        region_requirement: &[],
        reverse: false,
    },
    StaticConnection {
        origin: "Far Shore",
        destination: "Far Shore to Fortress",
        requirement: &[&[PRAYER]],
        region_requirement: &["Fortress Exterior from Overworld", "Beneath the Vault Back", "Eastern Vault Fortress"],
        reverse: false,
    },
    StaticConnection {
        origin: "Far Shore to Fortress",
        destination: "Far Shore",
        requirement: &[],
        region_requirement: &[],
        reverse: false,
    },
    StaticConnection {
        origin: "Far Shore",
        destination: "Far Shore to Library",
        requirement: &[&[PRAYER]],
        region_requirement: &["Library Lab"],
        reverse: false,
    },
    StaticConnection {
        origin: "Far Shore to Library",
        destination: "Far Shore",
        requirement: &[],
        region_requirement: &[],
        reverse: false,
    },
    // Each shop placeholder opens onto the single shop interior.
    StaticConnection {
        origin: "Shop Entrance 1",
        destination: "Shop",
        requirement: &[],
        region_requirement: &[],
        reverse: true,
    },
    StaticConnection {
        origin: "Shop Entrance 2",
        destination: "Shop",
        requirement: &[],
        region_requirement: &[],
        reverse: true,
    },
    StaticConnection {
        origin: "Shop Entrance 3",
        destination: "Shop",
        requirement: &[],
        region_requirement: &[],
        reverse: true,
    },
    StaticConnection {
        origin: "Shop Entrance 4",
        destination: "Shop",
        requirement: &[],
        region_requirement: &[],
        reverse: true,
    },
    StaticConnection {
        origin: "Shop Entrance 5",
        destination: "Shop",
        requirement: &[],
        region_requirement: &[],
        reverse: true,
    },
    StaticConnection {
        origin: "Shop Entrance 6",
        destination: "Shop",
        requirement: &[],
        region_requirement: &[],
        reverse: true,
    },
];

/// Having any trigger region makes all of the group's regions reachable.
pub const DEPENDENT_REGIONS: &[DependentRegionGroup] = &[
    DependentRegionGroup {
        triggers: &["Overworld", "Overworld Belltower", "Overworld Laurels", "Overworld Southeast Cross Door", "Overworld Temple Door", "Overworld Fountain Cross Door", "Overworld Town Portal", "Overworld Spawn Portal"],
        regions: &["Overworld", "Overworld Belltower", "Overworld Laurels", "Overworld Ruined Hall Door", "Overworld Southeast Cross Door", "Overworld Old House Door", "Overworld Temple Door", "Overworld Fountain Cross Door", "Overworld Town Portal", "Overworld Spawn Portal"],
    },
    DependentRegionGroup {
        triggers: &["Old House Front"],
        regions: &["Old House Front", "Old House Back"],
    },
    DependentRegionGroup {
        triggers: &["Furnace Fuse", "Furnace Ladder Area", "Furnace Walking Path"],
        regions: &["Furnace Fuse", "Furnace Ladder Area", "Furnace Walking Path"],
    },
    DependentRegionGroup {
        triggers: &["Sealed Temple", "Sealed Temple Rafters"],
        regions: &["Sealed Temple", "Sealed Temple Rafters"],
    },
    DependentRegionGroup {
        triggers: &["Forest Belltower Upper"],
        regions: &["Forest Belltower Upper", "Forest Belltower Main", "Forest Belltower Lower"],
    },
    DependentRegionGroup {
        triggers: &["Forest Belltower Main"],
        regions: &["Forest Belltower Main", "Forest Belltower Lower"],
    },
    DependentRegionGroup {
        triggers: &["East Forest", "East Forest Dance Fox Spot", "East Forest Portal"],
        regions: &["East Forest", "East Forest Dance Fox Spot", "East Forest Portal"],
    },
    DependentRegionGroup {
        triggers: &["Forest Grave Path Main", "Forest Grave Path Upper"],
        regions: &["Forest Grave Path Main", "Forest Grave Path Upper", "Forest Grave Path by Grave", "Forest Hero's Grave"],
    },
    DependentRegionGroup {
        triggers: &["Forest Grave Path by Grave", "Forest Hero's Grave"],
        regions: &["Forest Grave Path by Grave", "Forest Hero's Grave"],
    },
    DependentRegionGroup {
        triggers: &["Bottom of the Well Front", "Bottom of the Well Back"],
        regions: &["Bottom of the Well Front", "Bottom of the Well Back"],
    },
    DependentRegionGroup {
        triggers: &["Dark Tomb Entry Point", "Dark Tomb Main", "Dark Tomb Dark Exit"],
        regions: &["Dark Tomb Entry Point", "Dark Tomb Main", "Dark Tomb Dark Exit"],
    },
    DependentRegionGroup {
        triggers: &["Dark Tomb Checkpoint", "Well Boss"],
        regions: &["Dark Tomb Checkpoint", "Well Boss"],
    },
    DependentRegionGroup {
        triggers: &["West Garden", "West Garden Laurels Exit", "West Garden after Boss", "West Garden Hero's Grave"],
        regions: &["West Garden", "West Garden Laurels Exit", "West Garden after Boss", "West Garden Hero's Grave"],
    },
    DependentRegionGroup {
        triggers: &["Ruined Atoll", "Ruined Atoll Lower Entry Area", "Ruined Atoll Frog Mouth", "Ruined Atoll Portal"],
        regions: &["Ruined Atoll", "Ruined Atoll Lower Entry Area", "Ruined Atoll Frog Mouth", "Ruined Atoll Portal"],
    },
    DependentRegionGroup {
        triggers: &["Frog's Domain"],
        regions: &["Frog's Domain", "Frog's Domain Back"],
    },
    DependentRegionGroup {
        triggers: &["Library Exterior Ladder", "Library Exterior Tree"],
        regions: &["Library Exterior Ladder", "Library Exterior Tree"],
    },
    DependentRegionGroup {
        triggers: &["Library Hall", "Library Hero's Grave"],
        regions: &["Library Hall", "Library Hero's Grave"],
    },
    DependentRegionGroup {
        triggers: &["Library Lab", "Library Lab Lower", "Library Portal"],
        regions: &["Library Lab", "Library Lab Lower", "Library Portal"],
    },
    DependentRegionGroup {
        triggers: &["Fortress Courtyard Upper"],
        regions: &["Fortress Courtyard Upper", "Fortress Exterior from East Forest", "Fortress Exterior from Overworld", "Fortress Exterior near cave", "Fortress Courtyard"],
    },
    DependentRegionGroup {
        triggers: &["Fortress Exterior from East Forest", "Fortress Exterior from Overworld", "Fortress Exterior near cave", "Fortress Courtyard"],
        regions: &["Fortress Exterior from East Forest", "Fortress Exterior from Overworld", "Fortress Exterior near cave", "Fortress Courtyard"],
    },
    DependentRegionGroup {
        triggers: &["Beneath the Vault Front", "Beneath the Vault Back"],
        regions: &["Beneath the Vault Front", "Beneath the Vault Back"],
    },
    DependentRegionGroup {
        triggers: &["Fortress East Shortcut Upper"],
        regions: &["Fortress East Shortcut Upper", "Fortress East Shortcut Lower"],
    },
    DependentRegionGroup {
        triggers: &["Eastern Vault Fortress", "Eastern Vault Fortress Gold Door"],
        regions: &["Eastern Vault Fortress", "Eastern Vault Fortress Gold Door"],
    },
    DependentRegionGroup {
        triggers: &["Fortress Grave Path", "Fortress Grave Path Dusty Entrance", "Fortress Hero's Grave"],
        regions: &["Fortress Grave Path", "Fortress Grave Path Dusty Entrance", "Fortress Hero's Grave"],
    },
    DependentRegionGroup {
        triggers: &["Fortress Arena", "Fortress Arena Portal"],
        regions: &["Fortress Arena", "Fortress Arena Portal"],
    },
    DependentRegionGroup {
        triggers: &["Lower Mountain", "Lower Mountain Stairs"],
        regions: &["Lower Mountain", "Lower Mountain Stairs"],
    },
    DependentRegionGroup {
        triggers: &["Monastery Front", "Monastery Back", "Monastery Hero's Grave"],
        regions: &["Monastery Front", "Monastery Back", "Monastery Hero's Grave"],
    },
    DependentRegionGroup {
        triggers: &["Quarry", "Quarry Portal", "Lower Quarry"],
        regions: &["Quarry", "Quarry Portal", "Lower Quarry", "Lower Quarry Zig Door"],
    },
    DependentRegionGroup {
        triggers: &["Monastery Rope"],
        regions: &["Monastery Rope", "Quarry", "Quarry Portal", "Lower Quarry", "Lower Quarry Zig Door"],
    },
    DependentRegionGroup {
        triggers: &["Rooted Ziggurat Upper Front", "Rooted Ziggurat Upper Back"],
        regions: &["Rooted Ziggurat Upper Front", "Rooted Ziggurat Upper Back"],
    },
    DependentRegionGroup {
        triggers: &["Rooted Ziggurat Middle Top"],
        regions: &["Rooted Ziggurat Middle Top", "Rooted Ziggurat Middle Bottom"],
    },
    DependentRegionGroup {
        triggers: &["Rooted Ziggurat Lower Front", "Rooted Ziggurat Lower Back", "Rooted Ziggurat Portal Room Entrance"],
        regions: &["Rooted Ziggurat Lower Front", "Rooted Ziggurat Lower Back", "Rooted Ziggurat Portal Room Entrance"],
    },
    DependentRegionGroup {
        triggers: &["Rooted Ziggurat Portal", "Rooted Ziggurat Portal Room Exit"],
        regions: &["Rooted Ziggurat Portal", "Rooted Ziggurat Portal Room Exit"],
    },
    DependentRegionGroup {
        triggers: &["Swamp", "Swamp to Cathedral Treasure Room", "Swamp to Cathedral Main Entrance"],
        regions: &["Swamp", "Swamp to Cathedral Treasure Room", "Swamp to Cathedral Main Entrance"],
    },
    DependentRegionGroup {
        triggers: &["Back of Swamp", "Back of Swamp Laurels Area", "Swamp Hero's Grave"],
        regions: &["Back of Swamp", "Back of Swamp Laurels Area", "Swamp Hero's Grave"],
    },
    DependentRegionGroup {
        triggers: &["Cathedral Gauntlet Checkpoint"],
        regions: &["Cathedral Gauntlet Checkpoint", "Cathedral Gauntlet Exit", "Cathedral Gauntlet"],
    },
    DependentRegionGroup {
        triggers: &["Far Shore", "Far Shore to Spawn", "Far Shore to East Forest", "Far Shore to Quarry", "Far Shore to Fortress", "Far Shore to Library", "Far Shore to West Garden"],
        regions: &["Far Shore", "Far Shore to Spawn", "Far Shore to East Forest", "Far Shore to Quarry", "Far Shore to Fortress", "Far Shore to Library", "Far Shore to West Garden"],
    },
];
