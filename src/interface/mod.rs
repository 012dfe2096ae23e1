pub mod prompts;
pub mod render;

pub use prompts::{
    FoodAction, WizardChoice, prompt_catalog_food, prompt_custom_food, prompt_entry,
    prompt_food_action, prompt_profile, prompt_quantity, prompt_step, prompt_yes_no,
};
pub use render::{
    display_advice, display_catalog, display_food_log, display_forecast, display_incomplete,
    display_profile, display_search_results,
};
