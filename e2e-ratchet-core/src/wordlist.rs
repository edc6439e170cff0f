//! Fixed ordered wordlist used to render verification words (the SAS).
//!
//! The order is part of the protocol contract (see `sas`): both peers must
//! use the identical list, in the identical order, to get identical words
//! from an identical `base_key`. Entries MAY be deduped in a future edit but
//! MUST NOT be reordered.

/// 256 distinct, lowercase, ASCII words. The length is a power of two so the
/// `% WORDLIST.len()` reduction in `sas::verification_words` has no bias.
pub const WORDLIST: [&str; 256] = [
    "apple", "bravo", "comet", "delta", "eagle", "flame", "grape", "harbor",
    "igloo", "jungle", "kitten", "lemon", "mango", "nectar", "otter", "piano",
    "quartz", "river", "saddle", "tiger", "umber", "violet", "willow", "xenon",
    "yellow", "zephyr", "anchor", "breeze", "canyon", "desert", "ember", "forest",
    "glacier", "harvest", "island", "jasmine", "kernel", "ladder", "meadow", "nimbus",
    "oasis", "pepper", "quiver", "ribbon", "summit", "thicket", "urchin", "valley",
    "walnut", "yonder", "zigzag", "almond", "beacon", "cactus", "dagger", "embers",
    "falcon", "golden", "hazel", "ivory", "jacket", "kindle", "lagoon", "marble",
    "nickel", "onyx", "pebble", "quilt", "rocket", "spruce", "timber", "unicorn",
    "vapor", "wander", "yearly", "zodiac", "arrow", "basket", "candle", "drizzle",
    "echo", "feather", "goblin", "hamlet", "indigo", "jigsaw", "kayak", "lantern",
    "mirror", "noodle", "orchid", "pickle", "quokka", "ribcage", "saffron", "tundra",
    "upward", "velvet", "whisper", "xylophone", "yogurt", "zircon", "antler", "boulder",
    "cricket", "driftwood", "emerald", "fable", "garnet", "hollow", "impulse", "koala",
    "kettle", "lumber", "mosaic", "novel", "opal", "parsley", "quartet", "ravine",
    "sable", "tepee", "unfold", "vortex", "wicker", "yield", "zenith", "albatross",
    "bramble", "comrade", "dewdrop", "eclipse", "flagstone", "grotto", "hollyhock", "inkwell",
    "jubilee", "kinship", "larkspur", "mildew", "nutmeg", "oxbow", "pinnacle", "quagmire",
    "ripple", "saltmarsh", "thistle", "underbrush", "vellum", "wintry", "yawning", "zestful",
    "abacus", "birchwood", "copper", "driftnet", "evergreen", "foxglove", "gravel", "heather",
    "ironwood", "junction", "knapsack", "lichen", "millpond", "nightjar", "outcrop", "pinewood",
    "quarryman", "rowan", "shoreline", "thornback", "underfoot", "viaduct", "whitecap", "yarrow",
    "zephyrus", "acorn", "bayou", "crag", "dunlin", "elmwood", "fennel", "gorse",
    "hickory", "inlet", "juniper", "kestrel", "larch", "millstone", "norland", "osprey",
    "pondweed", "quicksand", "rivulet", "sedge", "thornfield", "underwood", "vale", "willowherb",
    "yewtree", "zestiness", "amberlight", "birchbark", "candlewick", "driftglass", "elderflower", "fernhollow",
    "greywind", "heronmarsh", "icecrest", "junewood", "knollside", "loamfield", "mossgate", "northstar",
    "oakbridge", "pinecrest", "quietfen", "ridgeback", "stonemeadow", "thornwood", "underglow", "vinebrook",
    "windfall", "yarrowfield", "zephyrglade", "brambleton", "cedarwell", "maple", "birch", "cedar",
    "elm", "fir", "oak", "pine", "teak", "ash", "beech", "poplar",
    "alder", "cherry", "plum", "peach", "pear", "apricot", "fig", "date",
    "kiwi", "melon", "berry", "grapefruit", "papaya", "guava", "mint", "basil",];
