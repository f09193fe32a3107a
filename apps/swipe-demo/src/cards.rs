//! Cards shown by the demo.

pub struct CardData {
    pub id: u64,
    pub name: &'static str,
    pub color: &'static str,
    pub image: &'static str,
}

pub const CARDS: &[CardData] = &[
    CardData {
        id: 1,
        name: "Jang Woonyoung",
        color: "#6366F1",
        image: "idol1",
    },
    CardData {
        id: 2,
        name: "Ning Ning",
        color: "#10B981",
        image: "idol2",
    },
    CardData {
        id: 3,
        name: "Liz",
        color: "#F43F5E",
        image: "idol3",
    },
];
