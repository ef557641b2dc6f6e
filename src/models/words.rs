// Built-in word lists, one per category

/// The six built-in category names, in selection order.
pub const BUILTIN_CATEGORIES: &[&str] = &["tech", "food", "animals", "pop", "silly", "dev"];

pub const TECH_WORDS: &[&str] = &[
    // Programming concepts
    "code", "hack", "debug", "compile", "syntax", "binary", "pixel", "logic",
    "array", "string", "function", "variable", "method", "class", "object",
    "component", "module", "service", "api", "endpoint",
    // System & infrastructure
    "server", "client", "database", "cache", "queue", "worker", "proxy",
    "firewall", "router", "container", "pod", "cluster", "deployment",
    "namespace",
    // Architecture
    "microservice", "monolith", "framework", "library", "package", "bundle",
    "plugin", "extension", "integration", "migration", "refactor",
    "optimization", "performance", "scalability", "security", "testing",
];

pub const FOOD_WORDS: &[&str] = &[
    // Main meals
    "pizza", "burger", "taco", "pasta", "sushi", "donut", "sandwich", "salad",
    "soup", "noodles", "curry", "stew", "kebab", "wrap", "burrito", "nachos",
    "lasagna", "risotto", "paella", "hummus",
    // Sweet & desserts
    "cake", "cupcake", "muffin", "cookie", "brownie", "pie", "icecream",
    "gelato", "pudding", "tiramisu", "cheesecake", "croissant", "macaron",
    "chocolate", "fudge", "toffee",
    // Beverages
    "coffee", "espresso", "latte", "cappuccino", "mocha", "smoothie",
    "lemonade", "chai", "matcha", "boba",
    // Snacks
    "popcorn", "pretzels", "crackers", "cheese", "olives", "salsa",
    "guacamole", "bruschetta", "wings", "fries",
];

pub const ANIMAL_WORDS: &[&str] = &[
    // Mammals
    "penguin", "koala", "dolphin", "tiger", "panda", "turtle", "rabbit",
    "fox", "wolf", "bear", "lion", "otter", "meerkat", "sloth", "hippo",
    "giraffe", "zebra", "elephant", "rhino", "monkey", "gorilla", "lemur",
    "kangaroo", "wombat", "platypus", "armadillo", "hedgehog", "ferret",
    "mongoose", "badger", "raccoon", "coyote", "lynx", "bobcat",
    // Birds
    "parrot", "toucan", "eagle", "falcon", "hawk", "owl", "flamingo",
    "pelican", "swan", "peacock",
    // Marine life
    "shark", "whale", "orca", "narwhal", "octopus", "squid", "jellyfish",
    "seahorse", "salmon", "lobster", "crab", "shrimp",
    // Small creatures
    "butterfly", "dragonfly", "beetle", "ladybug", "cricket", "mantis",
];

pub const POP_WORDS: &[&str] = &[
    // Fantasy & sci-fi
    "ninja", "samurai", "wizard", "knight", "viking", "pirate", "astronaut",
    "robot", "superhero", "detective", "warrior", "mage", "sorcerer",
    "paladin", "ranger", "cleric", "druid", "assassin", "barbarian", "monk",
    "bard", "healer", "summoner", "necromancer",
    // Creative arts
    "musician", "artist", "painter", "sculptor", "writer", "poet", "dancer",
    "director", "composer", "drummer", "photographer", "designer",
    "architect", "chef", "baker",
    // Historical
    "pharaoh", "emperor", "king", "queen", "gladiator", "centurion",
    "spartan",
    // Modern roles
    "gamer", "streamer", "blogger",
];

pub const SILLY_WORDS: &[&str] = &[
    // Food, but sillier
    "potato", "banana", "unicorn", "noodle", "pickle", "marshmallow",
    "cucumber", "broccoli", "carrot", "tomato", "garlic", "ginger",
    "mushroom", "avocado", "papaya", "mango", "kiwi", "pineapple", "coconut",
    "watermelon", "jellybean", "cottoncandy", "gummybear", "peanutbutter",
    // Silly objects
    "rubberduck", "sockpuppet", "paperclip", "stapler", "gluestick",
    "abacus", "typewriter", "telegraph",
    // Emotions & states
    "happy", "excited", "curious", "playful", "goofy", "weird", "strange",
    "bizarre", "odd", "peculiar", "quirky", "silly", "funny", "hilarious",
    "absurd", "ridiculous",
];

pub const DEV_WORDS: &[&str] = &[
    // Version control
    "github", "gitlab", "bitbucket", "repo", "branch", "commit", "push",
    "pull", "merge", "rebase", "fork", "clone", "remote", "origin",
    "upstream", "develop", "feature", "release", "hotfix",
    // Cloud platforms
    "aws", "gcp", "azure", "heroku", "vercel", "netlify", "lambda",
    "serverless", "compute", "instance",
    // Tooling
    "docker", "kubernetes", "helm", "terraform", "ansible", "jenkins",
    "gradle", "maven", "npm", "yarn", "pnpm", "pip", "webpack", "vite",
    "rollup", "esbuild", "babel", "typescript",
    // Testing & quality
    "jest", "cypress", "selenium", "playwright", "mocha", "vitest",
    "eslint", "prettier",
];

/// Built-in word list for a category. Unknown names yield an empty slice.
pub fn builtin_words(category: &str) -> &'static [&'static str] {
    match category {
        "tech" => TECH_WORDS,
        "food" => FOOD_WORDS,
        "animals" => ANIMAL_WORDS,
        "pop" => POP_WORDS,
        "silly" => SILLY_WORDS,
        "dev" => DEV_WORDS,
        _ => &[],
    }
}

/// One-line description of a built-in category, for listings.
pub fn builtin_description(category: &str) -> Option<&'static str> {
    match category {
        "tech" => Some("Technology & programming related words"),
        "food" => Some("Food, cooking and beverage words"),
        "animals" => Some("Animals and nature words"),
        "pop" => Some("Pop culture, fantasy and creative arts words"),
        "silly" => Some("Silly, funny and absurd words"),
        "dev" => Some("Development tools and programming words"),
        _ => None,
    }
}
