use super::{ClassifiedUnit, PrintInstruction, UnitClass};


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub music_on_page: usize,
    pub regular_on_page: usize,
    pub is_first_page: bool,
}

impl PageState {
    pub fn first_page() -> Self {
        PageState {
            music_on_page: 0,
            regular_on_page: 0,
            is_first_page: true,
        }
    }

    fn after_break() -> Self {
        PageState {
            music_on_page: 0,
            regular_on_page: 0,
            is_first_page: false,
        }
    }

    fn with_placed(self, class: UnitClass) -> Self {
        match class {
            UnitClass::Music => PageState { music_on_page: self.music_on_page + 1, ..self },
            UnitClass::Regular => PageState { regular_on_page: self.regular_on_page + 1, ..self },
        }
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::first_page()
    }
}

/// Whether a unit of `class` has to go on a new page, given what is already
/// on the current one. The first page leaves room for the heading, so it takes
/// one music unit or two regular units less, but the same mixed combination.
pub fn needs_break(class: UnitClass, state: &PageState) -> bool {
    let PageState { music_on_page: music, regular_on_page: regular, is_first_page } = *state;

    match class {
        UnitClass::Music => {
            music >= 2
                || (music == 1 && regular == 1)
                || regular == 3
                || (is_first_page && music == 1)
        },
        UnitClass::Regular => {
            music >= 2
                || (music == 1 && regular == 1)
                || regular == 3
                || (is_first_page && regular == 2)
        },
    }
}

/// Packs one sequence of units, starting on a first page.
pub fn pack_units<'a, I>(units: I) -> Vec<PrintInstruction<'a>> where I: IntoIterator<Item = ClassifiedUnit<'a>> {
    let (_, instructions) = units.into_iter().fold(
        (PageState::first_page(), Vec::new()),
        |(state, mut instructions), unit| {
            let state = if needs_break(unit.class, &state) {
                instructions.push(PrintInstruction::PageBreak);
                PageState::after_break()
            }
            else {
                state
            };

            instructions.push(PrintInstruction::PlaceUnit { unit });
            (state.with_placed(unit.class), instructions)
        }
    );

    instructions
}

/// Packs the regular units, then the finale units behind a forced page break.
/// The finale run starts over with first page capacities.
pub fn pack_sequences<'a>(regular: Vec<ClassifiedUnit<'a>>, finale: Vec<ClassifiedUnit<'a>>) -> Vec<PrintInstruction<'a>> {
    let mut instructions = pack_units(regular);

    if !finale.is_empty() {
        instructions.push(PrintInstruction::PageBreak);
        instructions.extend(pack_units(finale));
    }

    instructions
}
