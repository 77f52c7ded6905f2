use crate::PortalInfo;

/// Every transition point in the game, listed by the region that owns it.
pub const PORTALS: &[PortalInfo] = &[
    PortalInfo {
        name: "Stick House Entrance",
        region: "Overworld",
        destination: "Sword Cave",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "Windmill Entrance",
        region: "Overworld",
        destination: "Windmill",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "Well Ladder Entrance",
        region: "Overworld",
        destination: "Sewer",
        tag: "entrance",
        dead_end: false,
    },
    PortalInfo {
        name: "Entrance to Well from Well Rail",
        region: "Overworld Well to Furnace Rail",
        destination: "Sewer",
        tag: "west_aqueduct",
        dead_end: false,
    },
    PortalInfo {
        name: "Old House Entry Door",
        region: "Overworld Old House Door",
        destination: "Overworld Interiors",
        tag: "house",
        dead_end: false,
    },
    PortalInfo {
        name: "Old House Waterfall Entrance",
        region: "Overworld",
        destination: "Overworld Interiors",
        tag: "under_checkpoint",
        dead_end: false,
    },
    PortalInfo {
        name: "Entrance to Furnace from Well Rail",
        region: "Overworld Well to Furnace Rail",
        destination: "Furnace",
        tag: "gyro_upper_north",
        dead_end: false,
    },
    PortalInfo {
        name: "Entrance to Furnace from Windmill",
        region: "Overworld",
        destination: "Furnace",
        tag: "gyro_upper_east",
        dead_end: false,
    },
    PortalInfo {
        name: "Entrance to Furnace from West Garden",
        region: "Overworld to West Garden from Furnace",
        destination: "Furnace",
        tag: "gyro_west",
        dead_end: false,
    },
    PortalInfo {
        name: "Entrance to Furnace from Beach",
        region: "Overworld",
        destination: "Furnace",
        tag: "gyro_lower",
        dead_end: false,
    },
    PortalInfo {
        name: "Rotating Lights Entrance",
        region: "Overworld",
        destination: "Overworld Cave",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "Swamp Upper Entrance",
        region: "Overworld Laurels",
        destination: "Swamp Redux 2",
        tag: "wall",
        dead_end: false,
    },
    PortalInfo {
        name: "Swamp Lower Entrance",
        region: "Overworld",
        destination: "Swamp Redux 2",
        tag: "conduit",
        dead_end: false,
    },
    PortalInfo {
        name: "Ruined Hall Entrance Not-Door",
        region: "Overworld",
        destination: "Ruins Passage",
        tag: "east",
        dead_end: false,
    },
    PortalInfo {
        name: "Ruined Hall Entrance Door",
        region: "Overworld Ruined Hall Door",
        destination: "Ruins Passage",
        tag: "west",
        dead_end: false,
    },
    PortalInfo {
        name: "Atoll Upper Entrance",
        region: "Overworld",
        destination: "Atoll Redux",
        tag: "upper",
        dead_end: false,
    },
    PortalInfo {
        name: "Atoll Lower Entrance",
        region: "Overworld",
        destination: "Atoll Redux",
        tag: "lower",
        dead_end: false,
    },
    PortalInfo {
        name: "Special Shop Entrance",
        region: "Overworld Laurels",
        destination: "ShopSpecial",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "Maze Cave Entrance",
        region: "Overworld",
        destination: "Maze Room",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "West Garden Entrance by Belltower",
        region: "Overworld Belltower",
        destination: "Archipelagos Redux",
        tag: "upper",
        dead_end: false,
    },
    PortalInfo {
        name: "West Garden Entrance by Dark Tomb",
        region: "Overworld to West Garden from Furnace",
        destination: "Archipelagos Redux",
        tag: "lower",
        dead_end: false,
    },
    PortalInfo {
        name: "West Garden Laurel Entrance",
        region: "Overworld Laurels",
        destination: "Archipelagos Redux",
        tag: "lowest",
        dead_end: false,
    },
    PortalInfo {
        name: "Temple Door Entrance",
        region: "Overworld Temple Door",
        destination: "Temple",
        tag: "main",
        dead_end: false,
    },
    PortalInfo {
        name: "Temple Rafters Entrance",
        region: "Overworld",
        destination: "Temple",
        tag: "rafters",
        dead_end: false,
    },
    PortalInfo {
        name: "Ruined Shop Entrance",
        region: "Overworld",
        destination: "Ruined Shop",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "Patrol Cave Entrance",
        region: "Overworld",
        destination: "PatrolCave",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "Hourglass Cave Entrance",
        region: "Overworld",
        destination: "Town Basement",
        tag: "beach",
        dead_end: false,
    },
    PortalInfo {
        name: "Changing Room Entrance",
        region: "Overworld",
        destination: "Changing Room",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "Cube Room Entrance",
        region: "Overworld",
        destination: "CubeRoom",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "Stairs from Overworld to Mountain",
        region: "Overworld",
        destination: "Mountain",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "Overworld to Fortress",
        region: "Overworld",
        destination: "Fortress Courtyard",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "Fountain HC Entrance",
        region: "Overworld Fountain Cross Door",
        destination: "Town_FiligreeRoom",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "Glass Cannon HC Room Entrance",
        region: "Overworld Southeast Cross Door",
        destination: "EastFiligreeCache",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "Overworld to Quarry Connector",
        region: "Overworld",
        destination: "Darkwoods Tunnel",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "Dark Tomb Main Entrance",
        region: "Overworld",
        destination: "Crypt Redux",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "Overworld to Forest Belltower",
        region: "Overworld",
        destination: "Forest Belltower",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "Town Portal",
        region: "Overworld Town Portal",
        destination: "Transit",
        tag: "teleporter_town",
        dead_end: false,
    },
    PortalInfo {
        name: "Spawn Portal",
        region: "Overworld Spawn Portal",
        destination: "Transit",
        tag: "teleporter_starting island",
        dead_end: false,
    },
    PortalInfo {
        name: "Entrance to Fairy Cave",
        region: "Overworld",
        destination: "Waterfall",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "Fairy Cave Exit",
        region: "Secret Gathering Place",
        destination: "Overworld Redux",
        tag: "",
        dead_end: true,
    },
    PortalInfo {
        name: "Windmill Exit",
        region: "Windmill",
        destination: "Overworld Redux",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "Windmill Shop",
        region: "Windmill",
        destination: "Shop",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "Exit from Old House Front Door",
        region: "Old House Front",
        destination: "Overworld Redux",
        tag: "house",
        dead_end: false,
    },
    PortalInfo {
        name: "Teleport to Secret Treasure Room",
        region: "Old House Front",
        destination: "g_elements",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "Exit from Old House Back Door",
        region: "Old House Back",
        destination: "Overworld Redux",
        tag: "under_checkpoint",
        dead_end: false,
    },
    PortalInfo {
        name: "Secret Treasure Room Exit",
        region: "Relic Tower",
        destination: "Overworld Interiors",
        tag: "",
        dead_end: true,
    },
    PortalInfo {
        name: "Changing Room Exit",
        region: "Changing Room",
        destination: "Overworld Redux",
        tag: "",
        dead_end: true,
    },
    PortalInfo {
        name: "Fountain HC Room Exit",
        region: "Fountain Cross Room",
        destination: "Overworld Redux",
        tag: "",
        dead_end: true,
    },
    PortalInfo {
        name: "Cube Room Exit",
        region: "Cube Cave",
        destination: "Overworld Redux",
        tag: "",
        dead_end: true,
    },
    PortalInfo {
        name: "Guard Patrol Cave Exit",
        region: "Patrol Cave",
        destination: "Overworld Redux",
        tag: "",
        dead_end: true,
    },
    PortalInfo {
        name: "Ruined Shop Exit",
        region: "Ruined Shop",
        destination: "Overworld Redux",
        tag: "",
        dead_end: true,
    },
    PortalInfo {
        name: "Furnace to Well Rail",
        region: "Furnace Fuse",
        destination: "Overworld Redux",
        tag: "gyro_upper_north",
        dead_end: false,
    },
    PortalInfo {
        name: "Furnace to Dark Tomb",
        region: "Furnace Walking Path",
        destination: "Crypt Redux",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "Furnace to West Garden",
        region: "Furnace Walking Path",
        destination: "Overworld Redux",
        tag: "gyro_west",
        dead_end: false,
    },
    PortalInfo {
        name: "Furnace to Beach",
        region: "Furnace Ladder Area",
        destination: "Overworld Redux",
        tag: "gyro_lower",
        dead_end: false,
    },
    PortalInfo {
        name: "Furnace to Windmill",
        region: "Furnace Ladder Area",
        destination: "Overworld Redux",
        tag: "gyro_upper_east",
        dead_end: false,
    },
    PortalInfo {
        name: "Stick House Exit",
        region: "Stick House",
        destination: "Overworld Redux",
        tag: "",
        dead_end: true,
    },
    PortalInfo {
        name: "Ruined Passage Door Exit",
        region: "Ruined Passage",
        destination: "Overworld Redux",
        tag: "east",
        dead_end: false,
    },
    PortalInfo {
        name: "Ruined Passage Not-door Exit",
        region: "Ruined Passage",
        destination: "Overworld Redux",
        tag: "west",
        dead_end: false,
    },
    PortalInfo {
        name: "Glass Cannon HC Room Exit",
        region: "Southeast Cross Room",
        destination: "Overworld Redux",
        tag: "",
        dead_end: true,
    },
    PortalInfo {
        name: "Rotating Lights Exit",
        region: "Caustic Light Cave",
        destination: "Overworld Redux",
        tag: "",
        dead_end: true,
    },
    PortalInfo {
        name: "Maze Cave Exit",
        region: "Maze Cave",
        destination: "Overworld Redux",
        tag: "",
        dead_end: true,
    },
    PortalInfo {
        name: "Hourglass Cave Exit",
        region: "Hourglass Cave",
        destination: "Overworld Redux",
        tag: "beach",
        dead_end: true,
    },
    PortalInfo {
        name: "Special Shop Exit",
        region: "Special Shop",
        destination: "Overworld Redux",
        tag: "",
        dead_end: true,
    },
    PortalInfo {
        name: "Temple Rafters Exit",
        region: "Sealed Temple Rafters",
        destination: "Overworld Redux",
        tag: "rafters",
        dead_end: false,
    },
    PortalInfo {
        name: "Temple Door Exit",
        region: "Sealed Temple",
        destination: "Overworld Redux",
        tag: "main",
        dead_end: false,
    },
    PortalInfo {
        name: "Well Ladder Exit",
        region: "Bottom of the Well Front",
        destination: "Overworld Redux",
        tag: "entrance",
        dead_end: false,
    },
    PortalInfo {
        name: "Well to Well Boss",
        region: "Bottom of the Well Back",
        destination: "Sewer_Boss",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "Well Rail Exit",
        region: "Bottom of the Well Back",
        destination: "Overworld Redux",
        tag: "west_aqueduct",
        dead_end: false,
    },
    PortalInfo {
        name: "Well Boss to Well",
        region: "Well Boss",
        destination: "Sewer",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "Checkpoint to Dark Tomb",
        region: "Dark Tomb Checkpoint",
        destination: "Crypt Redux",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "Dark Tomb to Overworld",
        region: "Dark Tomb Entry Point",
        destination: "Overworld Redux",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "Dark Tomb to Furnace",
        region: "Dark Tomb Dark Exit",
        destination: "Furnace",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "Dark Tomb to Checkpoint",
        region: "Dark Tomb Entry Point",
        destination: "Sewer_Boss",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "West Garden Exit near Hero's Grave",
        region: "West Garden",
        destination: "Overworld Redux",
        tag: "lower",
        dead_end: false,
    },
    PortalInfo {
        name: "Magic Dagger House Entrance",
        region: "West Garden",
        destination: "archipelagos_house",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "West Garden after Boss",
        region: "West Garden after Boss",
        destination: "Overworld Redux",
        tag: "upper",
        dead_end: false,
    },
    PortalInfo {
        name: "West Garden Shop",
        region: "West Garden",
        destination: "Shop",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "West Garden Laurels Exit",
        region: "West Garden Laurels Exit",
        destination: "Overworld Redux",
        tag: "lowest",
        dead_end: false,
    },
    PortalInfo {
        name: "West Garden Hero's Grave",
        region: "West Garden Hero's Grave",
        destination: "RelicVoid",
        tag: "teleporter_relic plinth",
        dead_end: false,
    },
    PortalInfo {
        name: "West Garden Portal",
        region: "West Garden Portal Area",
        destination: "Transit",
        tag: "teleporter_archipelagos_teleporter",
        dead_end: true,
    },
    PortalInfo {
        name: "Magic Dagger House Exit",
        region: "Magic Dagger House",
        destination: "Archipelagos Redux",
        tag: "",
        dead_end: true,
    },
    PortalInfo {
        name: "Upper Atoll Exit",
        region: "Ruined Atoll",
        destination: "Overworld Redux",
        tag: "upper",
        dead_end: false,
    },
    PortalInfo {
        name: "Lower Atoll Exit",
        region: "Ruined Atoll Lower Entry Area",
        destination: "Overworld Redux",
        tag: "lower",
        dead_end: false,
    },
    PortalInfo {
        name: "Atoll Shop",
        region: "Ruined Atoll",
        destination: "Shop",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "Atoll Portal",
        region: "Ruined Atoll Portal",
        destination: "Transit",
        tag: "teleporter_atoll",
        dead_end: false,
    },
    PortalInfo {
        name: "Atoll to Library",
        region: "Ruined Atoll",
        destination: "Library Exterior",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "Frog Eye Entrance",
        region: "Ruined Atoll",
        destination: "Frog Stairs",
        tag: "eye",
        dead_end: false,
    },
    PortalInfo {
        name: "Frog Mouth Entrance",
        region: "Ruined Atoll Frog Mouth",
        destination: "Frog Stairs",
        tag: "mouth",
        dead_end: false,
    },
    PortalInfo {
        name: "Frog Eye Exit",
        region: "Frog's Domain Entry",
        destination: "Atoll Redux",
        tag: "eye",
        dead_end: false,
    },
    PortalInfo {
        name: "Frog Mouth Exit",
        region: "Frog's Domain Entry",
        destination: "Atoll Redux",
        tag: "mouth",
        dead_end: false,
    },
    PortalInfo {
        name: "Upper Frog to Lower Frog Entrance",
        region: "Frog's Domain Entry",
        destination: "frog cave main",
        tag: "Entrance",
        dead_end: false,
    },
    PortalInfo {
        name: "Upper Frog to Lower Frog Exit",
        region: "Frog's Domain Entry",
        destination: "frog cave main",
        tag: "Exit",
        dead_end: false,
    },
    PortalInfo {
        name: "Lower Frog Ladder Exit",
        region: "Frog's Domain",
        destination: "Frog Stairs",
        tag: "Entrance",
        dead_end: false,
    },
    PortalInfo {
        name: "Lower Frog Orb Exit",
        region: "Frog's Domain Back",
        destination: "Frog Stairs",
        tag: "Exit",
        dead_end: false,
    },
    PortalInfo {
        name: "Library to Atoll",
        region: "Library Exterior Tree",
        destination: "Atoll Redux",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "Library Entry Ladder",
        region: "Library Exterior Ladder",
        destination: "Library Hall",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "Library Bookshelf Exit",
        region: "Library Hall",
        destination: "Library Exterior",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "Library Hero's Grave",
        region: "Library Hero's Grave",
        destination: "RelicVoid",
        tag: "teleporter_relic plinth",
        dead_end: false,
    },
    PortalInfo {
        name: "Lower Library to Rotunda",
        region: "Library Hall",
        destination: "Library Rotunda",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "Library Rotunda Lower Exit",
        region: "Library Rotunda",
        destination: "Library Hall",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "Library Rotunda Upper Exit",
        region: "Library Rotunda",
        destination: "Library Lab",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "Upper Library to Rotunda",
        region: "Library Lab Lower",
        destination: "Library Rotunda",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "Library Portal",
        region: "Library Portal",
        destination: "Transit",
        tag: "teleporter_library teleporter",
        dead_end: false,
    },
    PortalInfo {
        name: "Upper Library to Librarian",
        region: "Library Lab",
        destination: "Library Arena",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "Librarian Arena Exit",
        region: "Library Arena",
        destination: "Library Lab",
        tag: "",
        dead_end: true,
    },
    PortalInfo {
        name: "Forest to Belltower",
        region: "East Forest",
        destination: "Forest Belltower",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "Forest Guard House 1 Lower Entrance",
        region: "East Forest",
        destination: "East Forest Redux Laddercave",
        tag: "lower",
        dead_end: false,
    },
    PortalInfo {
        name: "Forest Guard House 1 Gate Entrance",
        region: "East Forest",
        destination: "East Forest Redux Laddercave",
        tag: "gate",
        dead_end: false,
    },
    PortalInfo {
        name: "Forest Fox Dance Outside Doorway",
        region: "East Forest Dance Fox Spot",
        destination: "East Forest Redux Laddercave",
        tag: "upper",
        dead_end: false,
    },
    PortalInfo {
        name: "Forest Portal",
        region: "East Forest Portal",
        destination: "Transit",
        tag: "teleporter_forest teleporter",
        dead_end: false,
    },
    PortalInfo {
        name: "Forest Guard House 2 Lower Entrance",
        region: "East Forest",
        destination: "East Forest Redux Interior",
        tag: "lower",
        dead_end: false,
    },
    PortalInfo {
        name: "Forest Guard House 2 Upper Entrance",
        region: "East Forest",
        destination: "East Forest Redux Interior",
        tag: "upper",
        dead_end: false,
    },
    PortalInfo {
        name: "Forest Grave Path Lower Entrance",
        region: "East Forest",
        destination: "Sword Access",
        tag: "lower",
        dead_end: false,
    },
    PortalInfo {
        name: "Forest Grave Path Upper Entrance",
        region: "East Forest",
        destination: "Sword Access",
        tag: "upper",
        dead_end: false,
    },
    PortalInfo {
        name: "Guard House 1 Dance Exit",
        region: "Guard House 1 West",
        destination: "East Forest Redux",
        tag: "upper",
        dead_end: false,
    },
    PortalInfo {
        name: "Guard House 1 Lower Exit",
        region: "Guard House 1 West",
        destination: "East Forest Redux",
        tag: "lower",
        dead_end: false,
    },
    PortalInfo {
        name: "Guard House 1 Upper Forest Exit",
        region: "Guard House 1 East",
        destination: "East Forest Redux",
        tag: "gate",
        dead_end: false,
    },
    PortalInfo {
        name: "Guard House 1 to Guard Captain Room",
        region: "Guard House 1 East",
        destination: "Forest Boss Room",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "Upper Forest Grave Path Exit",
        region: "Forest Grave Path Upper",
        destination: "East Forest Redux",
        tag: "upper",
        dead_end: false,
    },
    PortalInfo {
        name: "Lower Forest Grave Path Exit",
        region: "Forest Grave Path Main",
        destination: "East Forest Redux",
        tag: "lower",
        dead_end: false,
    },
    PortalInfo {
        name: "East Forest Hero's Grave",
        region: "Forest Hero's Grave",
        destination: "RelicVoid",
        tag: "teleporter_relic plinth",
        dead_end: false,
    },
    PortalInfo {
        name: "Guard House 2 Lower Exit",
        region: "Guard House 2",
        destination: "East Forest Redux",
        tag: "lower",
        dead_end: false,
    },
    PortalInfo {
        name: "Guard House 2 Upper Exit",
        region: "Guard House 2",
        destination: "East Forest Redux",
        tag: "upper",
        dead_end: false,
    },
    PortalInfo {
        name: "Guard Captain Room Non-Gate Exit",
        region: "Forest Boss Room",
        destination: "East Forest Redux Laddercave",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "Guard Captain Room Gate Exit",
        region: "Forest Boss Room",
        destination: "Forest Belltower",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "Forest Belltower to Fortress",
        region: "Forest Belltower Main",
        destination: "Fortress Courtyard",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "Forest Belltower to Forest",
        region: "Forest Belltower Lower",
        destination: "East Forest Redux",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "Forest Belltower to Overworld",
        region: "Forest Belltower Main",
        destination: "Overworld Redux",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "Forest Belltower to Guard Captain Room",
        region: "Forest Belltower Upper",
        destination: "Forest Boss Room",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "Lower Fortress Grave Path Entrance",
        region: "Fortress Courtyard",
        destination: "Fortress Reliquary",
        tag: "Lower",
        dead_end: false,
    },
    PortalInfo {
        name: "Upper Fortress Grave Path Entrance",
        region: "Fortress Courtyard Upper",
        destination: "Fortress Reliquary",
        tag: "Upper",
        dead_end: false,
    },
    PortalInfo {
        name: "Fortress Courtyard to Fortress Interior",
        region: "Fortress Courtyard",
        destination: "Fortress Main",
        tag: "Big Door",
        dead_end: false,
    },
    PortalInfo {
        name: "Fortress Courtyard to Fortress East",
        region: "Fortress Courtyard Upper",
        destination: "Fortress East",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "Fortress Courtyard to Beneath the Earth",
        region: "Fortress Exterior near cave",
        destination: "Fortress Basement",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "Fortress Courtyard to Forest Belltower",
        region: "Fortress Exterior from East Forest",
        destination: "Forest Belltower",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "Fortress Courtyard to Overworld",
        region: "Fortress Exterior from Overworld",
        destination: "Overworld Redux",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "Fortress Courtyard Shop",
        region: "Fortress Exterior near cave",
        destination: "Shop",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "Beneath the Earth to Fortress Interior",
        region: "Beneath the Vault Back",
        destination: "Fortress Main",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "Beneath the Earth to Fortress Courtyard",
        region: "Beneath the Vault Front",
        destination: "Fortress Courtyard",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "Fortress Main Exit",
        region: "Eastern Vault Fortress",
        destination: "Fortress Courtyard",
        tag: "Big Door",
        dead_end: false,
    },
    PortalInfo {
        name: "Fortress Interior to Beneath the Earth",
        region: "Eastern Vault Fortress",
        destination: "Fortress Basement",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "Fortress Interior to Siege Engine",
        region: "Eastern Vault Fortress Gold Door",
        destination: "Fortress Arena",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "Fortress Interior Shop",
        region: "Eastern Vault Fortress",
        destination: "Shop",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "Fortress Interior to East Fortress Upper",
        region: "Eastern Vault Fortress",
        destination: "Fortress East",
        tag: "upper",
        dead_end: false,
    },
    PortalInfo {
        name: "Fortress Interior to East Fortress Lower",
        region: "Eastern Vault Fortress",
        destination: "Fortress East",
        tag: "lower",
        dead_end: false,
    },
    PortalInfo {
        name: "East Fortress to Interior Lower",
        region: "Fortress East Shortcut Lower",
        destination: "Fortress Main",
        tag: "lower",
        dead_end: false,
    },
    PortalInfo {
        name: "East Fortress to Courtyard",
        region: "Fortress East Shortcut Upper",
        destination: "Fortress Courtyard",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "East Fortress to Interior Upper",
        region: "Fortress East Shortcut Upper",
        destination: "Fortress Main",
        tag: "upper",
        dead_end: false,
    },
    PortalInfo {
        name: "Lower Fortress Grave Path Exit",
        region: "Fortress Grave Path",
        destination: "Fortress Courtyard",
        tag: "Lower",
        dead_end: false,
    },
    PortalInfo {
        name: "Fortress Hero's Grave",
        region: "Fortress Grave Path",
        destination: "RelicVoid",
        tag: "teleporter_relic plinth",
        dead_end: false,
    },
    PortalInfo {
        name: "Fortress Grave Path Dusty Entrance",
        region: "Fortress Grave Path Dusty Entrance",
        destination: "Dusty",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "Dusty Exit",
        region: "Fortress Leaf Piles",
        destination: "Fortress Reliquary",
        tag: "",
        dead_end: true,
    },
    PortalInfo {
        name: "Upper Fortress Grave Path Exit",
        region: "Fortress Grave Path Upper",
        destination: "Fortress Courtyard",
        tag: "Upper",
        dead_end: true,
    },
    PortalInfo {
        name: "Siege Engine Arena to Fortress",
        region: "Fortress Arena",
        destination: "Fortress Main",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "Fortress Portal",
        region: "Fortress Arena Portal",
        destination: "Transit",
        tag: "teleporter_spidertank",
        dead_end: false,
    },
    PortalInfo {
        name: "Stairs to Top of the Mountain",
        region: "Lower Mountain Stairs",
        destination: "Mountaintop",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "Mountain to Quarry",
        region: "Lower Mountain",
        destination: "Quarry Redux",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "Mountain to Overworld",
        region: "Lower Mountain",
        destination: "Overworld Redux",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "Top of the Mountain Exit",
        region: "Top of the Mountain",
        destination: "Mountain",
        tag: "",
        dead_end: true,
    },
    PortalInfo {
        name: "Quarry Connector to Overworld",
        region: "Quarry Connector",
        destination: "Overworld Redux",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "Quarry Connector to Quarry",
        region: "Quarry Connector",
        destination: "Quarry Redux",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "Quarry to Overworld Exit",
        region: "Quarry",
        destination: "Darkwoods Tunnel",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "Quarry Shop",
        region: "Quarry",
        destination: "Shop",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "Quarry to Monastery Front",
        region: "Quarry",
        destination: "Monastery",
        tag: "front",
        dead_end: false,
    },
    PortalInfo {
        name: "Quarry to Monastery Back",
        region: "Monastery Rope",
        destination: "Monastery",
        tag: "back",
        dead_end: false,
    },
    PortalInfo {
        name: "Quarry to Mountain",
        region: "Quarry",
        destination: "Mountain",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "Quarry Zig Entrance",
        region: "Lower Quarry Zig Door",
        destination: "ziggurat2020_0",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "Quarry Portal",
        region: "Quarry Portal",
        destination: "Transit",
        tag: "teleporter_quarry teleporter",
        dead_end: false,
    },
    PortalInfo {
        name: "Monastery Rear Exit",
        region: "Monastery Back",
        destination: "Quarry Redux",
        tag: "back",
        dead_end: false,
    },
    PortalInfo {
        name: "Monastery Front Exit",
        region: "Monastery Front",
        destination: "Quarry Redux",
        tag: "front",
        dead_end: false,
    },
    PortalInfo {
        name: "Monastery Hero's Grave",
        region: "Monastery Hero's Grave",
        destination: "RelicVoid",
        tag: "teleporter_relic plinth",
        dead_end: false,
    },
    PortalInfo {
        name: "Zig Entry Hallway to Zig 1",
        region: "Rooted Ziggurat Entry",
        destination: "ziggurat2020_1",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "Zig Entry Hallway to Quarry",
        region: "Rooted Ziggurat Entry",
        destination: "Quarry Redux",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "Zig 1 to Zig Entry",
        region: "Rooted Ziggurat Upper Front",
        destination: "ziggurat2020_0",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "Zig 1 to Zig 2",
        region: "Rooted Ziggurat Upper Back",
        destination: "ziggurat2020_2",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "Zig 2 to Zig 1",
        region: "Rooted Ziggurat Middle Top",
        destination: "ziggurat2020_1",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "Zig 2 to Zig 3",
        region: "Rooted Ziggurat Middle Bottom",
        destination: "ziggurat2020_3",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "Zig Portal Room Entrance",
        region: "Rooted Ziggurat Portal Room Entrance",
        destination: "ziggurat2020_FTRoom",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "Zig 3 to Zig 2",
        region: "Rooted Ziggurat Lower Front",
        destination: "ziggurat2020_2",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "Zig Portal Room Exit",
        region: "Rooted Ziggurat Portal Room Exit",
        destination: "ziggurat2020_3",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "Zig Portal",
        region: "Rooted Ziggurat Portal",
        destination: "Transit",
        tag: "teleporter_ziggurat teleporter",
        dead_end: false,
    },
    PortalInfo {
        name: "Lower Swamp Exit",
        region: "Swamp",
        destination: "Overworld Redux",
        tag: "conduit",
        dead_end: false,
    },
    PortalInfo {
        name: "Swamp to Cathedral Main Entrance",
        region: "Swamp to Cathedral Main Entrance",
        destination: "Cathedral Redux",
        tag: "main",
        dead_end: false,
    },
    PortalInfo {
        name: "Swamp to Cathedral Treasure Room Entrance",
        region: "Swamp to Cathedral Treasure Room",
        destination: "Cathedral Redux",
        tag: "secret",
        dead_end: false,
    },
    PortalInfo {
        name: "Swamp to Gauntlet",
        region: "Back of Swamp",
        destination: "Cathedral Arena",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "Swamp Shop",
        region: "Swamp",
        destination: "Shop",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "Upper Swamp Exit",
        region: "Back of Swamp Laurels Area",
        destination: "Overworld Redux",
        tag: "wall",
        dead_end: false,
    },
    PortalInfo {
        name: "Swamp Hero's Grave",
        region: "Swamp Hero's Grave",
        destination: "RelicVoid",
        tag: "teleporter_relic plinth",
        dead_end: false,
    },
    PortalInfo {
        name: "Cathedral Main Exit",
        region: "Cathedral",
        destination: "Swamp Redux 2",
        tag: "main",
        dead_end: false,
    },
    PortalInfo {
        name: "Cathedral Elevator",
        region: "Cathedral",
        destination: "Cathedral Arena",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "Cathedral Treasure Room Exit",
        region: "Cathedral Secret Legend Room",
        destination: "Swamp Redux 2",
        tag: "secret",
        dead_end: true,
    },
    PortalInfo {
        name: "Gauntlet to Swamp",
        region: "Cathedral Gauntlet Exit",
        destination: "Swamp Redux 2",
        tag: "",
        dead_end: true,
    },
    PortalInfo {
        name: "Gauntlet Elevator",
        region: "Cathedral Gauntlet Checkpoint",
        destination: "Cathedral Redux",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "Gauntlet Shop",
        region: "Cathedral Gauntlet Checkpoint",
        destination: "Shop",
        tag: "",
        dead_end: false,
    },
    PortalInfo {
        name: "Hero Relic to Fortress",
        region: "Hero Relic - Fortress",
        destination: "Fortress Reliquary",
        tag: "teleporter_relic plinth",
        dead_end: true,
    },
    PortalInfo {
        name: "Hero Relic to Monastery",
        region: "Hero Relic - Quarry",
        destination: "Monastery",
        tag: "teleporter_relic plinth",
        dead_end: true,
    },
    PortalInfo {
        name: "Hero Relic to West Garden",
        region: "Hero Relic - West Garden",
        destination: "Archipelagos Redux",
        tag: "teleporter_relic plinth",
        dead_end: true,
    },
    PortalInfo {
        name: "Hero Relic to East Forest",
        region: "Hero Relic - East Forest",
        destination: "Sword Access",
        tag: "teleporter_relic plinth",
        dead_end: true,
    },
    PortalInfo {
        name: "Hero Relic to Library",
        region: "Hero Relic - Library",
        destination: "Library Hall",
        tag: "teleporter_relic plinth",
        dead_end: true,
    },
    PortalInfo {
        name: "Hero Relic to Swamp",
        region: "Hero Relic - Swamp",
        destination: "Swamp Redux 2",
        tag: "teleporter_relic plinth",
        dead_end: true,
    },
    PortalInfo {
        name: "Far Shore to West Garden",
        region: "Far Shore to West Garden",
        destination: "Archipelagos Redux",
        tag: "teleporter_archipelagos_teleporter",
        dead_end: false,
    },
    PortalInfo {
        name: "Far Shore to Library",
        region: "Far Shore to Library",
        destination: "Library Lab",
        tag: "teleporter_library teleporter",
        dead_end: false,
    },
    PortalInfo {
        name: "Far Shore to Quarry",
        region: "Far Shore to Quarry",
        destination: "Quarry Redux",
        tag: "teleporter_quarry teleporter",
        dead_end: false,
    },
    PortalInfo {
        name: "Far Shore to East Forest",
        region: "Far Shore to East Forest",
        destination: "East Forest Redux",
        tag: "teleporter_forest teleporter",
        dead_end: false,
    },
    PortalInfo {
        name: "Far Shore to Fortress",
        region: "Far Shore to Fortress",
        destination: "Fortress Arena",
        tag: "teleporter_spidertank",
        dead_end: false,
    },
    PortalInfo {
        name: "Far Shore to Atoll",
        region: "Far Shore",
        destination: "Atoll Redux",
        tag: "teleporter_atoll",
        dead_end: false,
    },
    PortalInfo {
        name: "Far Shore to Zig",
        region: "Far Shore",
        destination: "ziggurat2020_FTRoom",
        tag: "teleporter_ziggurat teleporter",
        dead_end: false,
    },
    PortalInfo {
        name: "Far Shore to Heir",
        region: "Far Shore",
        destination: "Spirit Arena",
        tag: "teleporter_spirit arena",
        dead_end: false,
    },
    PortalInfo {
        name: "Far Shore to Town",
        region: "Far Shore",
        destination: "Overworld Redux",
        tag: "teleporter_town",
        dead_end: false,
    },
    PortalInfo {
        name: "Far Shore to Spawn",
        region: "Far Shore to Spawn",
        destination: "Overworld Redux",
        tag: "teleporter_starting island",
        dead_end: false,
    },
    PortalInfo {
        name: "Heir Arena Exit",
        region: "Spirit Arena",
        destination: "Transit",
        tag: "teleporter_spirit arena",
        dead_end: true,
    },
    PortalInfo {
        name: "Purgatory Bottom Exit",
        region: "Purgatory",
        destination: "Purgatory",
        tag: "bottom",
        dead_end: false,
    },
    PortalInfo {
        name: "Purgatory Top Exit",
        region: "Purgatory",
        destination: "Purgatory",
        tag: "top",
        dead_end: false,
    },
];
