use super::super::RuleOutcome;
use super::contains_any;

const NO_PHOTOS_SCORE: i32 = 20;
const SINGLE_PHOTO_SCORE: i32 = 10;
const STOCK_PHOTO_SCORE: i32 = 15;

const STOCK_PHOTO_MARKERS: &[&str] = &["placeholder", "stock", "default"];

pub(crate) fn evaluate(photos: &[String]) -> RuleOutcome {
    match photos {
        [] => RuleOutcome::flag(NO_PHOTOS_SCORE, "no photos available"),
        [_] => RuleOutcome::flag(SINGLE_PHOTO_SCORE, "only one photo available"),
        _ => {
            let stock = photos
                .iter()
                .any(|photo| contains_any(&photo.to_lowercase(), STOCK_PHOTO_MARKERS));
            if stock {
                RuleOutcome::flag(STOCK_PHOTO_SCORE, "photos may be stock/downloaded images")
            } else {
                RuleOutcome::none()
            }
        }
    }
}
