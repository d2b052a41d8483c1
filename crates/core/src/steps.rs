//! The fixed four-step drawing sequence.
//!
//! Step content is static configuration data: every tutorial carries the
//! same four entries, in the same order. It correlates with the quadrant
//! layout requested from the generation model but is not derived from
//! the generated image.

use serde::{Deserialize, Serialize};

/// One entry of the four-step drawing sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub step_number: i32,
    pub title: String,
    pub description: String,
}

/// Number of steps in every tutorial.
pub const STEP_COUNT: usize = 4;

const STEP_TABLE: [(i32, &str, &str); STEP_COUNT] = [
    (
        1,
        "Basic Shapes",
        "Break the subject down into simple geometric shapes: circles, ovals, \
         rectangles and triangles. Focus on establishing proportions and the \
         overall composition before any detail.\n\
         Tips:\n\
         - Keep your lines light so they are easy to adjust\n\
         - Compare the relative sizes of the shapes against each other\n\
         - Work from the largest form down to the smallest",
    ),
    (
        2,
        "Rough Sketch",
        "Refine the basic shapes into recognizable forms. Add structure and \
         landmarks while keeping the lines loose and exploratory. Accuracy \
         matters more than cleanliness at this stage.\n\
         Tips:\n\
         - Sketch through overlapping forms to keep volumes consistent\n\
         - Check angles and alignments against the shapes from step one\n\
         - Do not erase the construction lines yet",
    ),
    (
        3,
        "Line Work",
        "Commit to clean, confident outlines. Define the edges and the \
         important interior details with deliberate strokes. This is where \
         the drawing gains clarity.\n\
         Tips:\n\
         - Vary line weight: heavier on shadowed and structural edges\n\
         - Draw each stroke in one motion rather than sketchy repetitions\n\
         - Erase or fade the remaining construction lines",
    ),
    (
        4,
        "Shading",
        "Add values, shadows and highlights to create depth and dimension. \
         Decide on a single light source and keep every shadow consistent \
         with it.\n\
         Tips:\n\
         - Block in the darkest values first, then work toward the lights\n\
         - Use the side of the pencil for large tonal areas\n\
         - Reserve pure white for the brightest highlights only",
    ),
];

/// The standard step descriptions, identical for every tutorial.
pub fn tutorial_steps() -> Vec<Step> {
    STEP_TABLE
        .iter()
        .map(|&(step_number, title, description)| Step {
            step_number,
            title: title.to_string(),
            description: description.to_string(),
        })
        .collect()
}
