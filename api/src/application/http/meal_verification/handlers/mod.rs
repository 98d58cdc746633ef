pub mod analyze_food_image;
pub mod verify_menu;
