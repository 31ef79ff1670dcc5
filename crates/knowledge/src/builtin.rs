//! The compiled-in reference corpus.
//!
//! Each entry is `(topic key, passage)`. The first sentence of every
//! passage carries its meaning, because only a prefix survives when the
//! knowledge section is truncated.

pub(crate) const PASSAGES: &[(&str, &str)] = &[
    // Major Arcana
    (
        "card:the-fool",
        "The Fool marks a beginning taken on trust, a step off the cliff before the path is visible. It asks for openness rather than certainty.",
    ),
    (
        "card:the-magician",
        "The Magician signals that the tools needed are already on the table. Focused will turns scattered resources into action.",
    ),
    (
        "card:the-high-priestess",
        "The High Priestess points to knowledge that is felt before it is spoken. Silence and patience reveal what argument cannot.",
    ),
    (
        "card:the-empress",
        "The Empress embodies abundance that grows through care. Nurture, comfort and creative fertility are in season.",
    ),
    (
        "card:the-emperor",
        "The Emperor brings structure, authority and the discipline to hold a boundary. Order protects what matters.",
    ),
    (
        "card:the-hierophant",
        "The Hierophant speaks for tradition, teachers and shared belief. Learning within an established form is favoured.",
    ),
    (
        "card:the-lovers",
        "The Lovers concern a choice made from the heart and the values it reveals. Union follows alignment, not convenience.",
    ),
    (
        "card:the-chariot",
        "The Chariot shows momentum won by holding opposing forces in one direction. Victory comes through steady control.",
    ),
    (
        "card:strength",
        "Strength is courage expressed as gentleness. Patience tames what force would only provoke.",
    ),
    (
        "card:the-hermit",
        "The Hermit withdraws to find a light that cannot be borrowed. Solitude here is a search, not an escape.",
    ),
    (
        "card:wheel-of-fortune",
        "The Wheel of Fortune turns whether or not anyone is ready. Cycles shift and a change of circumstance is underway.",
    ),
    (
        "card:justice",
        "Justice weighs cause and consequence with clear eyes. Honest accounting brings a fair outcome.",
    ),
    (
        "card:the-hanged-man",
        "The Hanged Man pauses by choice and sees the world from a new angle. Surrender opens what effort kept closed.",
    ),
    (
        "card:death",
        "Death is an ending that clears ground for what comes next. It rarely means literal loss and almost always means transformation.",
    ),
    (
        "card:temperance",
        "Temperance blends opposites into something workable. Moderation and patience let healing take its time.",
    ),
    (
        "card:the-devil",
        "The Devil names a bond that feels fixed but is held in place by habit or fear. Seeing the chain is the first step to loosening it.",
    ),
    (
        "card:the-tower",
        "The Tower is sudden upheaval that breaks false structures. What falls was not built to last.",
    ),
    (
        "card:the-star",
        "The Star restores hope after difficulty. Quiet renewal and trust in the future return.",
    ),
    (
        "card:the-moon",
        "The Moon casts uncertainty, where shapes shift and fears grow in the dark. Intuition guides better than logic here.",
    ),
    (
        "card:the-sun",
        "The Sun brings clarity, vitality and open joy. What was hidden becomes plain and success is warmly lit.",
    ),
    (
        "card:judgement",
        "Judgement is an awakening call to rise and answer a deeper purpose. Past choices are reviewed and released.",
    ),
    (
        "card:the-world",
        "The World completes a cycle with integration and earned fulfilment. One chapter closes whole before the next begins.",
    ),
    // Frequently drawn minors
    (
        "card:three-of-swords",
        "The Three of Swords is heartbreak or a painful truth spoken aloud. Grief acknowledged is grief that can begin to heal.",
    ),
    (
        "card:ten-of-swords",
        "The Ten of Swords marks rock bottom, a painful ending that cannot get worse. Dawn follows the darkest point.",
    ),
    (
        "card:ace-of-cups",
        "The Ace of Cups offers new emotional beginnings and an overflowing heart. Love or compassion arrives freely.",
    ),
    (
        "card:ten-of-cups",
        "The Ten of Cups is lasting emotional fulfilment shared with others. Home and belonging are in harmony.",
    ),
    (
        "card:five-of-pentacles",
        "The Five of Pentacles shows hardship and feeling left out in the cold. Help is nearer than it appears.",
    ),
    (
        "card:eight-of-cups",
        "The Eight of Cups walks away from what no longer fulfils. Leaving is an act of self-respect.",
    ),
    (
        "card:six-of-swords",
        "The Six of Swords is a passage from troubled water toward calmer shores. The move is quiet but real.",
    ),
    // Suits
    (
        "suit:wands",
        "Wands belong to fire: ambition, creativity and the spark that starts things. They ask what drives you.",
    ),
    (
        "suit:cups",
        "Cups belong to water: feeling, relationship and intuition. They ask what you care about.",
    ),
    (
        "suit:swords",
        "Swords belong to air: thought, truth and conflict. They ask what you believe and how you speak it.",
    ),
    (
        "suit:pentacles",
        "Pentacles belong to earth: work, money, body and home. They ask what you are building.",
    ),
    (
        "major-arcana",
        "Major Arcana cards speak to significant life lessons and forces larger than daily choices. Several in one spread suggest a turning point of real weight.",
    ),
    (
        "reversed",
        "A reversed card often points to energy that is blocked, delayed or turned inward. It can also soften a difficult card.",
    ),
    (
        "reversed",
        "Reversals invite the reader to ask where the card's energy is missing or being resisted. They are a nuance, not a verdict.",
    ),
    // Positions
    (
        "position:past",
        "The Past position shows the ground the question grew from. It explains rather than dictates.",
    ),
    (
        "position:present",
        "The Present position describes what is active now and where attention can make a difference.",
    ),
    (
        "position:future",
        "The Future position shows the likely direction if the current course holds. It is a trajectory, not a fixed fate.",
    ),
    (
        "position:focus",
        "The Focus position distils the heart of the matter into a single image to reflect on.",
    ),
    (
        "position:situation",
        "The Situation position sets the scene and names the forces already in play.",
    ),
    (
        "position:action",
        "The Action position suggests the step most likely to move things forward.",
    ),
    (
        "position:outcome",
        "The Outcome position shows where the energies of the spread are heading when nothing changes.",
    ),
    (
        "position:you",
        "The You position reflects how the querent shows up in the relationship.",
    ),
    (
        "position:them",
        "The Them position reflects the other person's stance, as far as the cards can see it.",
    ),
    (
        "position:connection",
        "The Connection position describes what actually binds the two people together.",
    ),
    (
        "position:challenge",
        "The Challenge position names the obstacle or friction that must be worked with, not avoided.",
    ),
    (
        "position:potential",
        "The Potential position shows what the situation could become if both sides invest in it.",
    ),
    (
        "position:hidden-factor",
        "The Hidden Factor position uncovers an influence the querent has not yet weighed.",
    ),
    (
        "position:advice",
        "The Advice position offers the most constructive attitude to bring to the decision.",
    ),
    (
        "position:hopes-and-fears",
        "The Hopes and Fears position often holds one wish and its shadow in the same card.",
    ),
    // Narrative patterns
    (
        "pattern:struggle-to-resolution",
        "A spread that moves from difficulty to light tells a story of struggle that resolves. Honour the hardship before celebrating the relief.",
    ),
    (
        "pattern:decline-warning",
        "A spread that moves from ease into difficulty is a caution, not a curse. Name what can still be changed.",
    ),
    (
        "pattern:transformation",
        "Threshold cards signal a transformation in progress. Endings and beginnings overlap.",
    ),
    (
        "pattern:fated-journey",
        "When Major Arcana dominate, the reading concerns forces larger than a single decision. Speak to meaning and growth.",
    ),
    (
        "pattern:steady-growth",
        "A gently rising spread shows steady growth. Encourage patience with gradual progress.",
    ),
    (
        "pattern:sustained-challenge",
        "A spread heavy with difficult cards calls for grounding and practical support rather than false cheer.",
    ),
    (
        "pattern:sustained-harmony",
        "A spread full of favourable cards affirms what is already working. Invite gratitude and continuity.",
    ),
    (
        "pattern:crossroads",
        "A mixed spread describes a crossroads where several outcomes remain open. Balance possibilities evenly.",
    ),
    // Spreads
    (
        "spread:single",
        "A single-card draw is a focused reflection, best read as one clear message.",
    ),
    (
        "spread:three-card",
        "The three-card spread reads as a short story from past through present to future.",
    ),
    (
        "spread:situation-action-outcome",
        "The situation, action and outcome spread is practical: what is, what to do, where it leads.",
    ),
    (
        "spread:relationship",
        "The relationship spread compares two perspectives and the bond between them.",
    ),
    (
        "spread:decision",
        "The decision spread lays two options side by side with the hidden factor that tips the balance.",
    ),
    (
        "spread:celtic-cross",
        "The Celtic Cross is the classic ten-card spread, weaving the heart of the matter, its crossing challenge and its outcome.",
    ),
];
