/// Inputs offered by the processor; not queried from the device
pub const DEFAULT_SOURCES: [&str; 11] = [
    "Disc",
    "STB",
    "Cable Sat",
    "Media Server",
    "DVR",
    "Radio",
    "TV",
    "USB",
    "Game",
    "Home Network",
    "AUX",
];
