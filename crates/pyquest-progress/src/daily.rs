//! Daily challenges and streak bonuses.

use crate::config::ProgressConfig;
use serde::Serialize;
use Difficulty::{Easy, Hard, Medium};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyChallenge {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    /// Program shown in the editor, with `___` blanks to fill in.
    pub starter_code: &'static str,
    pub hint: &'static str,
    pub xp_reward: u32,
    pub difficulty: Difficulty,
    pub topic: &'static str,
}

/// Whether today's challenge is done, and which one it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyStatus {
    pub is_completed: bool,
    pub today_challenge: u32,
}

#[allow(clippy::too_many_arguments)]
const fn challenge(
    id: u32,
    title: &'static str,
    description: &'static str,
    starter_code: &'static str,
    hint: &'static str,
    xp_reward: u32,
    difficulty: Difficulty,
    topic: &'static str,
) -> DailyChallenge {
    DailyChallenge {
        id,
        title,
        description,
        starter_code,
        hint,
        xp_reward,
        difficulty,
        topic,
    }
}

pub const CHALLENGES: [DailyChallenge; 20] = [
    challenge(
        1,
        "Magic Number",
        "Create a variable called `magic` and set it to the number 42, then print it!",
        "# Create magic variable\nmagic = ___\nprint(magic)",
        "Replace ___ with the number 42",
        25,
        Easy,
        "Variables",
    ),
    challenge(
        2,
        "Greeting Spell",
        "Create a greeting that says \"Hello, World!\" and print it.",
        "# Create your greeting\ngreeting = \"___\"\nprint(greeting)",
        "Replace ___ with Hello, World!",
        25,
        Easy,
        "Strings",
    ),
    challenge(
        3,
        "Double Trouble",
        "Create a number variable and multiply it by 2!",
        "# Pick a number\nnumber = 5\ndouble = number * ___\nprint(double)",
        "Replace ___ with 2 to double the number",
        25,
        Easy,
        "Math",
    ),
    challenge(
        4,
        "Name Tag",
        "Create two variables: your name and age, then print both!",
        "# Your info\nname = \"___\"\nage = ___\nprint(name)\nprint(age)",
        "Fill in your name in quotes and age as a number",
        25,
        Easy,
        "Variables",
    ),
    challenge(
        5,
        "Weather Check",
        "Use an if-else to print \"Take umbrella!\" if raining is True, else print \"Enjoy the sun!\"",
        "# Check the weather\nraining = True\n\nif raining == ___:\n    print(\"Take umbrella!\")\nelse:\n    print(\"Enjoy the sun!\")",
        "Replace ___ with True to check if it's raining",
        35,
        Medium,
        "Conditionals",
    ),
    challenge(
        6,
        "Age Gate",
        "Check if age is 18 or more. Print \"Welcome!\" if yes, else \"Too young!\"",
        "# Age check\nage = 20\n\nif age ___ 18:\n    print(\"Welcome!\")\nelse:\n    print(\"Too young!\")",
        "Replace ___ with >= to check if age is 18 or more",
        35,
        Medium,
        "Conditionals",
    ),
    challenge(
        7,
        "Grade Calculator",
        "Use if-elif-else: 90+ is \"A\", 80+ is \"B\", else \"Keep trying!\"",
        "# Calculate grade\nscore = 85\n\nif score >= 90:\n    print(\"A\")\nelif score >= ___:\n    print(\"B\")\nelse:\n    print(\"Keep trying!\")",
        "Replace ___ with 80 to check for B grade",
        35,
        Medium,
        "Conditionals",
    ),
    challenge(
        8,
        "Password Check",
        "Check if password equals \"secret123\". Print \"Access granted!\" or \"Wrong password!\"",
        "# Security check\npassword = \"secret123\"\n\nif password ___ \"secret123\":\n    print(\"Access granted!\")\nelse:\n    print(\"Wrong password!\")",
        "Replace ___ with == to check equality",
        35,
        Medium,
        "Conditionals",
    ),
    challenge(
        9,
        "Countdown",
        "Use a for loop with range to count from 5 down to 1, then print \"Blast off!\"",
        "# Countdown sequence\nfor i in range(5, 0, ___):\n    print(i)\nprint(\"Blast off!\")",
        "Replace ___ with -1 to count backwards",
        40,
        Medium,
        "Loops",
    ),
    challenge(
        10,
        "Star Pattern",
        "Print 5 stars using a for loop!",
        "# Draw stars\nfor i in range(___):\n    print(\"⭐\")",
        "Replace ___ with 5 to print 5 stars",
        40,
        Medium,
        "Loops",
    ),
    challenge(
        11,
        "Sum Calculator",
        "Use a loop to add numbers 1 to 5 and print the total!",
        "# Add numbers\ntotal = 0\nfor i in range(1, ___):\n    total = total + i\nprint(total)",
        "Replace ___ with 6 (range stops before this number)",
        40,
        Medium,
        "Loops",
    ),
    challenge(
        12,
        "Spell Creator",
        "Create a function called `cast_spell` that prints \"✨ Magic!\" when called.",
        "# Create your spell\ndef ___():\n    print(\"✨ Magic!\")\n\n# Cast it!\ncast_spell()",
        "Replace ___ with cast_spell to name the function",
        50,
        Hard,
        "Functions",
    ),
    challenge(
        13,
        "Greeting Function",
        "Create a function that takes a name and prints \"Hello, [name]!\"",
        "# Greeting function\ndef greet(___):\n    print(\"Hello, \" + name + \"!\")\n\ngreet(\"Hero\")",
        "Replace ___ with name as the parameter",
        50,
        Hard,
        "Functions",
    ),
    challenge(
        14,
        "Double Function",
        "Create a function that returns a number multiplied by 2!",
        "# Double function\ndef double(num):\n    return num * ___\n\nresult = double(5)\nprint(result)",
        "Replace ___ with 2 to double the number",
        50,
        Hard,
        "Functions",
    ),
    challenge(
        15,
        "Fix the Bug",
        "This code has a syntax error. Find and fix it!",
        "# Fix the error\nmessage = \"Hello World\nprint(message)",
        "The string is missing a closing quote!",
        50,
        Hard,
        "Debugging",
    ),
    challenge(
        16,
        "Logic Fix",
        "Fix the loop so it prints 1, 2, 3 (not 0, 1, 2)!",
        "# Fix the range\nfor i in range(___, 4):\n    print(i)",
        "Replace ___ with 1 to start from 1",
        50,
        Hard,
        "Debugging",
    ),
    challenge(
        17,
        "Even Numbers",
        "Print only even numbers from 2 to 10 using a loop!",
        "# Even numbers only\nfor i in range(2, 11, ___):\n    print(i)",
        "Replace ___ with 2 to step by 2",
        45,
        Medium,
        "Loops",
    ),
    challenge(
        18,
        "Temperature Converter",
        "Convert 100 Celsius to Fahrenheit (F = C * 9/5 + 32)!",
        "# Temperature conversion\ncelsius = 100\nfahrenheit = celsius * 9/5 + ___\nprint(fahrenheit)",
        "Replace ___ with 32 to complete the formula",
        35,
        Medium,
        "Math",
    ),
    challenge(
        19,
        "Power Calculator",
        "Calculate 2 to the power of 8 using **!",
        "# Power up!\nbase = 2\npower = 8\nresult = base ___ power\nprint(result)",
        "Replace ___ with ** for exponentiation",
        35,
        Medium,
        "Math",
    ),
    challenge(
        20,
        "List Master",
        "Create a list of 3 fruits and print the first one!",
        "# Fruit list\nfruits = [\"apple\", \"banana\", \"___\"]\nprint(fruits[0])",
        "Replace ___ with any fruit name",
        30,
        Easy,
        "Lists",
    ),
];

/// The challenge shown for a given daily-challenge index. Wraps around.
pub fn challenge_for(index: u32) -> &'static DailyChallenge {
    &CHALLENGES[index as usize % CHALLENGES.len()]
}

/// Bonus XP for an active streak, capped.
pub fn streak_bonus(streak: u32, config: &ProgressConfig) -> u32 {
    streak
        .saturating_mul(config.streak_bonus_per_day)
        .min(config.streak_bonus_cap)
}

/// Reward for completing `challenge` with the given streak.
pub fn total_reward(challenge: &DailyChallenge, streak: u32, config: &ProgressConfig) -> u32 {
    challenge.xp_reward + streak_bonus(streak, config)
}
