//! Prompt templates for the tutorial-image generation call.
//!
//! Two fixed templates, one per input path. They differ only in whether
//! they reference a subject that was extracted from a photo; both ask
//! the model to fill the four quadrants of the supplied grid image and
//! to keep the artwork free of any text.

use crate::types::InputType;

const TOPIC_INPUT_TEMPLATE: &str = "\
Show a 4-step drawing tutorial of {subject} in the provided grid layout.
Create one single image, but show each step of the tutorial separately in its own quadrant of the grid:
1. Top left - Basic shapes: break the subject into simple geometric forms
2. Top right - Rough sketch: refine the shapes into recognizable proportions
3. Bottom left - Line work: clean, confident outlines
4. Bottom right - Shading: values, shadows and highlights for depth
Render artwork only. Do not include any text, labels, numbers, captions or watermarks anywhere in the image.";

const IMAGE_INPUT_TEMPLATE: &str = "\
The main subject of the source photo has been identified as: {subject}.
Show a 4-step drawing tutorial of that subject in the provided grid layout.
Create one single image, but show each step of the tutorial separately in its own quadrant of the grid:
1. Top left - Basic shapes: break the subject into simple geometric forms
2. Top right - Rough sketch: refine the shapes into recognizable proportions
3. Bottom left - Line work: clean, confident outlines
4. Bottom right - Shading: values, shadows and highlights for depth
Render artwork only. Do not include any text, labels, numbers, captions or watermarks anywhere in the image.";

/// Build the generation prompt for the given subject.
pub fn tutorial_prompt(subject: &str, input_type: InputType) -> String {
    let template = match input_type {
        InputType::Image => IMAGE_INPUT_TEMPLATE,
        InputType::Topic => TOPIC_INPUT_TEMPLATE,
    };
    template.replace("{subject}", subject)
}
