use ff_core::{AreaId, ItemKind, PuzzleKind, QuestId};

use crate::dialogue::Line;
use crate::npc::NpcId;

/// How a quest is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestKind {
    /// Deliver one item.
    Fetch {
        /// The item wanted.
        item: ItemKind,
    },
    /// Deliver several of the same item, one at a time.
    MultiFetch {
        /// The item wanted.
        item: ItemKind,
        /// How many are needed.
        required: u32,
    },
    /// Lead the quest giver to an area.
    Escort {
        /// Where the quest giver wants to go.
        destination: AreaId,
    },
}

/// Where a quest item lies while its quest is active.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemLocation {
    /// The item.
    pub item: ItemKind,
    /// The area it lies in.
    pub area: AreaId,
    /// World position.
    pub position: [f32; 3],
}

impl ItemLocation {
    /// Key identifying this spawn: quest, item, and position.
    pub fn spawn_key(&self, quest: QuestId) -> String {
        let [x, y, z] = self.position;
        format!("{quest}-{}-{x},{y},{z}", self.item)
    }
}

/// Static definition of a quest.
#[derive(Debug)]
pub struct QuestDef {
    /// The quest's id.
    pub id: QuestId,
    /// Who gives it.
    pub npc: NpcId,
    /// How it is resolved.
    pub kind: QuestKind,
    /// Items placed in the world while it is active.
    pub item_locations: &'static [ItemLocation],
    /// Puzzle to solve before resolving it.
    pub puzzle: Option<PuzzleKind>,
    /// Text of the mail letter.
    pub letter: &'static str,
    /// Recorded clip of the letter.
    pub letter_audio: &'static str,
    /// Said before the quest starts.
    pub intro: &'static [Line],
    /// Said for each delivery of a multi-fetch quest that does not finish it.
    pub received: &'static [Line],
    /// Said when an escort starts.
    pub following: &'static [Line],
    /// Said when the quest is resolved.
    pub completed: &'static [Line],
    /// Said once it is done for good.
    pub done: &'static [Line],
    /// Spark's hint while the quest is active.
    pub hint: Option<&'static str>,
}

impl QuestDef {
    /// The item the quest giver wants, for fetch quests.
    pub fn wanted_item(&self) -> Option<ItemKind> {
        match self.kind {
            QuestKind::Fetch { item } | QuestKind::MultiFetch { item, .. } => Some(item),
            QuestKind::Escort { .. } => None,
        }
    }

    /// The escort destination, for escort quests.
    pub fn destination(&self) -> Option<AreaId> {
        match self.kind {
            QuestKind::Escort { destination } => Some(destination),
            _ => None,
        }
    }
}

/// The definition of a quest.
pub fn quest_def(id: QuestId) -> &'static QuestDef {
    &QUESTS[id.order_index()]
}

/// Every quest definition, in delivery order.
pub fn quest_defs() -> &'static [QuestDef] {
    &QUESTS
}

const BUNNY: &str = "Bunny 🐰";
const UNICORN: &str = "Unicorn 🦄";
const BIRD: &str = "Bird 🐦";
const FROG: &str = "Frog 🐸";
const FOX: &str = "Fox Cub 🦊";
const DEER: &str = "Baby Deer 🦌";

const fn at(item: ItemKind, area: AreaId, position: [f32; 3]) -> ItemLocation {
    ItemLocation {
        item,
        area,
        position,
    }
}

static QUESTS: [QuestDef; 6] = [
    QuestDef {
        id: QuestId::LostCarrot,
        npc: NpcId::Bunny,
        kind: QuestKind::Fetch {
            item: ItemKind::Carrot,
        },
        item_locations: &[at(ItemKind::Carrot, AreaId::Creek, [3.0, 0.3, -2.0])],
        puzzle: None,
        letter: "Dear Lisa, 💌\nI lost my carrot! 🥕\nCan you help me find it?\n- Bunny 🐰",
        letter_audio: "mail-bunny",
        intro: &[
            Line::voiced("Oh no! I lost my carrot! 🥕", BUNNY, "bunny-01"),
            Line::voiced("Can you help me find it?", BUNNY, "bunny-02"),
            Line::voiced("I think it is by the big rocks. 🪨", BUNNY, "bunny-03"),
        ],
        received: &[],
        following: &[],
        completed: &[
            Line::voiced("You got my carrot! Thank you so much! 🥕🎉", BUNNY, "bunny-got-01"),
            Line::voiced("Go home and check the mail! 📬", BUNNY, "bunny-got-02"),
        ],
        done: &[Line::voiced("I love my carrot! 🥕💚", BUNNY, "bunny-done")],
        hint: Some("I saw a carrot by the creek! 🥕"),
    },
    QuestDef {
        id: QuestId::HornGem,
        npc: NpcId::Unicorn,
        kind: QuestKind::Fetch { item: ItemKind::Gem },
        item_locations: &[at(ItemKind::Gem, AreaId::Cave, [2.0, 0.4, 1.0])],
        puzzle: Some(PuzzleKind::Connections),
        letter: "Dear Lisa, 💌\nMy horn gem is gone! 💎\nIt is in the dark cave.\nCan you help me?\n- Unicorn 🦄",
        letter_audio: "mail-unicorn",
        intro: &[
            Line::voiced("My horn gem is gone! 💎", UNICORN, "unicorn-01"),
            Line::voiced("It is in the cave. But it is so dark!", UNICORN, "unicorn-02"),
            Line::voiced("Can you find it for me?", UNICORN, "unicorn-03"),
        ],
        received: &[],
        following: &[],
        completed: &[
            Line::voiced("My gem! You got it! 💎✨", UNICORN, "unicorn-got-01"),
            Line::voiced(
                "Thank you, Lisa! Go home and check the mail! 📬",
                UNICORN,
                "unicorn-got-02",
            ),
        ],
        done: &[Line::voiced("My horn shines so nice now! ✨", UNICORN, "unicorn-done")],
        hint: Some("The gem is in the cave. I can help see in the dark! 💎"),
    },
    QuestDef {
        id: QuestId::BuildNest,
        npc: NpcId::Bird,
        kind: QuestKind::MultiFetch {
            item: ItemKind::Twig,
            required: 3,
        },
        item_locations: &[
            at(ItemKind::Twig, AreaId::Hollow, [-2.0, 0.2, 0.0]),
            at(ItemKind::Twig, AreaId::Bushes, [4.0, 0.2, -1.0]),
            at(ItemKind::Twig, AreaId::Meadow, [-3.0, 0.2, 3.0]),
        ],
        puzzle: None,
        letter: "Dear Lisa, 💌\nI need to make a nest! 🪹\nCan you find me 3 twigs? 🌿\n- Bird 🐦",
        letter_audio: "mail-bird",
        intro: &[
            Line::voiced("I need to make a nest! 🪹", BIRD, "bird-01"),
            Line::voiced("Can you find me 3 twigs? 🌿", BIRD, "bird-02"),
            Line::voiced("Look in the forest!", BIRD, "bird-03"),
        ],
        received: &[Line::voiced("A twig! Thank you! 🌿", BIRD, "bird-got-twig")],
        following: &[],
        completed: &[
            Line::voiced(
                "You got all the twigs! Now I can make my nest! 🪹🎉",
                BIRD,
                "bird-all-01",
            ),
            Line::voiced("Go home and check the mail! 📬", BIRD, "bird-all-02"),
        ],
        done: &[Line::voiced("I love my nest! 🪹💚", BIRD, "bird-done")],
        hint: Some("Look for twigs in the forest! 🌿"),
    },
    QuestDef {
        id: QuestId::FrogCrown,
        npc: NpcId::Frog,
        kind: QuestKind::Fetch {
            item: ItemKind::Crown,
        },
        item_locations: &[at(ItemKind::Crown, AreaId::Cave, [-3.0, 0.3, 2.0])],
        puzzle: Some(PuzzleKind::Memory),
        letter: "Dear Lisa, 💌\nI lost my crown! 👑\nIt is in the cave.\nCan you find it?\n- Frog 🐸",
        letter_audio: "mail-frog",
        intro: &[
            Line::voiced("I am a frog prince! But I lost my crown! 🐸👑", FROG, "frog-01"),
            Line::voiced("I think it is in the cave.", FROG, "frog-02"),
        ],
        received: &[],
        following: &[],
        completed: &[
            Line::voiced("My crown! You got it! 👑🎉", FROG, "frog-got-01"),
            Line::voiced(
                "Thank you, Lisa! Go home and check the mail! 📬",
                FROG,
                "frog-got-02",
            ),
        ],
        done: &[Line::voiced("I feel like a prince! 👑✨", FROG, "frog-done")],
        hint: Some("The crown is deep in the cave! 👑"),
    },
    QuestDef {
        id: QuestId::FoxHome,
        npc: NpcId::Fox,
        kind: QuestKind::Escort {
            destination: AreaId::Glade,
        },
        item_locations: &[],
        puzzle: Some(PuzzleKind::Pattern),
        letter: "Dear Lisa, 💌\nI am lost! 😢\nCan you take me home?\nI live by the big glade.\n- Fox Cub 🦊",
        letter_audio: "mail-fox",
        intro: &[
            Line::voiced("I am lost! 😢", FOX, "fox-01"),
            Line::voiced("Can you help me get home?", FOX, "fox-02"),
            Line::voiced("I live by the big glade.", FOX, "fox-03"),
        ],
        received: &[],
        following: &[Line::voiced("I will go with you! Let's go! 🦊", FOX, "fox-follow")],
        completed: &[
            Line::voiced("This is it! I am home! 🎉", FOX, "fox-arrived-01"),
            Line::voiced(
                "Thank you so much, Lisa! Go home and check the mail! 📬",
                FOX,
                "fox-arrived-02",
            ),
        ],
        done: &[Line::voiced("I love it here! 💚", FOX, "fox-done")],
        hint: Some("The fox needs to go to the glade! 🦊"),
    },
    QuestDef {
        id: QuestId::FindMom,
        npc: NpcId::Deer,
        kind: QuestKind::Escort {
            destination: AreaId::Glen,
        },
        item_locations: &[],
        puzzle: Some(PuzzleKind::Sorting),
        letter: "Dear Lisa, 💌\nI can not find my mom! 😢\nShe is in the glen.\nCan you take me to her?\n- Baby Deer 🦌",
        letter_audio: "mail-deer",
        intro: &[
            Line::voiced("I can not find my mom! 😢", DEER, "deer-01"),
            Line::voiced("She is in the glen.", DEER, "deer-02"),
            Line::voiced("Can you take me to her?", DEER, "deer-03"),
        ],
        received: &[],
        following: &[Line::voiced("Let's go find my mom! 🦌", DEER, "deer-follow")],
        completed: &[
            Line::voiced("Mom! I found you! 🎉", DEER, "deer-arrived-01"),
            Line::voiced(
                "Thank you, Lisa! Go home and check the mail! 📬",
                DEER,
                "deer-arrived-02",
            ),
        ],
        done: &[Line::voiced("I am with my mom now! 💚", DEER, "deer-done")],
        hint: Some("The deer mom is in the glen! 🦌"),
    },
];
