// Element ids, selectors and class names the page markup provides.

// Loading screen
pub const LOADING_SCREEN_ID: &str = "loadingScreen";
pub const LOADING_PROGRESS_SELECTOR: &str = ".loading-progress";
pub const FADE_OUT_CLASS: &str = "fade-out";

// Reveal animations
pub const FADE_IN_UP_CLASS: &str = "fade-in-up";
pub const REVEAL_SELECTOR: &str =
    ".service-card, .portfolio-item, .section-header, .about-content, .contact-content";

// Hero
pub const HERO_CTA_SELECTOR: &str = ".hero-cta, .btn[data-target]";
pub const HERO_CTA_CLASS: &str = "hero-cta";
pub const STAT_SELECTOR: &str = ".stat-number[data-count]";

// Navigation
pub const HEADER_ID: &str = "header";
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const SECTION_SELECTOR: &str = "section[id]";
pub const NAV_TOGGLE_ID: &str = "navToggle";
pub const NAV_MENU_ID: &str = "navMenu";
pub const ACTIVE_CLASS: &str = "active";
pub const SCROLLED_CLASS: &str = "scrolled";

// Showreel and gallery
pub const PLAY_BUTTON_ID: &str = "playButton";
pub const VIDEO_CONTAINER_SELECTOR: &str = ".video-container";
pub const CATEGORY_ITEM_SELECTOR: &str = ".category-item";
pub const SERVICE_CARD_SELECTOR: &str = ".service-card[data-service]";
pub const FILTER_BUTTON_SELECTOR: &str = ".filter-btn";
pub const PORTFOLIO_ITEM_SELECTOR: &str = ".portfolio-item";
pub const VIDEO_MODAL_SELECTOR: &str = ".video-modal";

// Contact form
pub const CONTACT_FORM_ID: &str = "contactForm";
pub const FORM_CONTROL_SELECTOR: &str = "input, textarea, select";
pub const FIELD_ERROR_CLASS: &str = "field-error";
pub const FIELD_ERROR_COLOR: &str = "#ff4444";
