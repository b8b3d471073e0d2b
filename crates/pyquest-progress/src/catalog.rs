//! The adventure map: worlds, their lessons and the badges they award.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lesson {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub xp: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct World {
    /// 1-based; world `n` unlocks world `n + 1`.
    pub id: u32,
    pub slug: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub lessons: &'static [Lesson],
    /// Badge for finishing the world's first lesson.
    pub first_lesson_badge: &'static str,
    /// Badge for finishing every lesson in the world.
    pub completion_badge: &'static str,
}

const fn lesson(id: &'static str, title: &'static str, description: &'static str, xp: u32) -> Lesson {
    Lesson {
        id,
        title,
        description,
        xp,
    }
}

pub const WORLDS: [World; 5] = [
    World {
        id: 1,
        slug: "village-of-variables",
        name: "Village of Variables",
        description: "Learn about magic boxes that store your treasures",
        icon: "🏘️",
        lessons: &[
            lesson("var-1", "The Magic Bags", "Discover what variables are", 20),
            lesson("var-2", "Naming Your Treasures", "Learn to name variables properly", 20),
            lesson("var-3", "Numbers and Words", "Store different types of items", 25),
        ],
        first_lesson_badge: "variable-starter",
        completion_badge: "village-master",
    },
    World {
        id: 2,
        slug: "forest-of-if-else",
        name: "Forest of If-Else",
        description: "Navigate the paths of decisions and choices",
        icon: "🌲",
        lessons: &[
            lesson("if-1", "The Crossroads", "Make your first decision", 25),
            lesson("if-2", "The Guard's Question", "Learn conditional logic", 30),
            lesson("if-3", "Multiple Paths", "Handle many possibilities", 30),
        ],
        first_lesson_badge: "decision-maker",
        completion_badge: "forest-explorer",
    },
    World {
        id: 3,
        slug: "loop-mountains",
        name: "Loop Mountains",
        description: "Master the power of repetition",
        icon: "⛰️",
        lessons: &[
            lesson("loop-1", "The Training Grounds", "Repeat actions with loops", 30),
            lesson("loop-2", "Counting Steps", "Control how many times to repeat", 35),
            lesson("loop-3", "Breaking Free", "Learn to stop a loop", 35),
        ],
        first_lesson_badge: "loop-apprentice",
        completion_badge: "loop-hero",
    },
    World {
        id: 4,
        slug: "function-castle",
        name: "Function Castle",
        description: "Create powerful spell books that can be reused",
        icon: "🏰",
        lessons: &[
            lesson("func-1", "Writing Spell Books", "Create your first function", 35),
            lesson("func-2", "Spell Ingredients", "Pass values to functions", 40),
            lesson("func-3", "Returning Gifts", "Get values back from functions", 40),
        ],
        first_lesson_badge: "spell-writer",
        completion_badge: "castle-knight",
    },
    World {
        id: 5,
        slug: "dragon-of-debugging",
        name: "Dragon of Debugging",
        description: "Face the final boss and fix broken spells",
        icon: "🐉",
        lessons: &[
            lesson("debug-1", "Finding Mistakes", "Learn to spot errors", 40),
            lesson("debug-2", "The Dragon's Riddles", "Solve complex bugs", 50),
            lesson("debug-3", "Becoming a Hero", "Master all your skills", 60),
        ],
        first_lesson_badge: "bug-hunter",
        completion_badge: "dragon-slayer",
    },
];

pub fn world(id: u32) -> Option<&'static World> {
    WORLDS.iter().find(|w| w.id == id)
}

pub fn world_by_slug(slug: &str) -> Option<&'static World> {
    WORLDS.iter().find(|w| w.slug == slug)
}

/// The lesson with `id` and the world it belongs to.
pub fn find_lesson(id: &str) -> Option<(&'static World, &'static Lesson)> {
    WORLDS.iter().find_map(|w| {
        w.lessons
            .iter()
            .find(|l| l.id == id)
            .map(|lesson| (w, lesson))
    })
}

/// Every lesson on the map, in play order.
pub fn all_lessons() -> impl Iterator<Item = &'static Lesson> {
    WORLDS.iter().flat_map(|w| w.lessons.iter())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::badge;

    #[test]
    fn test_world_ids_are_sequential() {
        for (i, w) in WORLDS.iter().enumerate() {
            assert_eq!(w.id as usize, i + 1);
            assert_eq!(w.lessons.len(), 3);
        }
    }

    #[test]
    fn test_world_badges_exist() {
        for w in &WORLDS {
            assert!(badge::find(w.first_lesson_badge).is_some());
            assert!(badge::find(w.completion_badge).is_some());
        }
    }

    #[test]
    fn test_find_lesson() {
        let (w, l) = find_lesson("loop-2").unwrap();
        assert_eq!(w.slug, "loop-mountains");
        assert_eq!(l.xp, 35);
        assert!(find_lesson("loop-9").is_none());
        assert_eq!(all_lessons().count(), 15);
    }

    #[test]
    fn test_lookup_by_slug() {
        assert_eq!(world_by_slug("function-castle").map(|w| w.id), Some(4));
        assert!(world(6).is_none());
    }
}
