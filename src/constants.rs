// DOM contract with the host page: element ids, classes and CSS variables.

pub mod ids {
    pub const TITLE: &str = "valentineTitle";
    pub const Q1_TEXT: &str = "question1Text";
    pub const YES_1: &str = "yesBtn1";
    pub const NO_1: &str = "noBtn1";
    pub const SECRET_BUTTON: &str = "secretAnswerBtn";
    pub const SECRET_ANSWER: &str = "secretAnswer";
    pub const Q2_TEXT: &str = "question2Text";
    pub const START_TEXT: &str = "startText";
    pub const NEXT: &str = "nextBtn";
    pub const Q3_TEXT: &str = "question3Text";
    pub const YES_3: &str = "yesBtn3";
    pub const NO_3: &str = "noBtn3";

    pub const LOVE_METER: &str = "loveMeter";
    pub const LOVE_VALUE: &str = "loveValue";
    pub const EXTRA_LOVE: &str = "extraLove";

    pub const CELEBRATION_TITLE: &str = "celebrationTitle";
    pub const CELEBRATION_MESSAGE: &str = "celebrationMessage";
    pub const CELEBRATION_EMOJIS: &str = "celebrationEmojisWrap";

    pub const BG_MUSIC: &str = "bgMusic";
    pub const MUSIC_SOURCE: &str = "musicSource";
    pub const MUSIC_TAP_OVERLAY: &str = "musicTapOverlay";
}

pub mod classes {
    pub const HIDDEN: &str = "hidden";
    pub const TITLE_REVEAL: &str = "title-reveal";
    pub const REVEALED: &str = "revealed";
    pub const HEART: &str = "heart";
    pub const BEAR: &str = "bear";
    pub const SWAY: &str = "sway";
    pub const WIGGLE: &str = "wiggle";
    pub const NO_WIGGLE: &str = "no-wiggle";
    pub const SUPER_LOVE: &str = "super-love";
    pub const BURST: &str = "love-meter-burst";
    pub const CONFETTI: &str = "confetti-piece";
    pub const CELEBRATION_EMOJI: &str = "celebration-emoji";
}

pub mod selectors {
    pub const FLOATING_LAYER: &str = ".floating-elements";
    pub const METER_TRACK: &str = ".love-meter";
}

pub mod css_vars {
    pub const FLOAT_SCALE: &str = "--float-scale";
    pub const SECRET_SCALE: &str = "--secret-reveal-scale";
    pub const LOVE_PERCENT: &str = "--love-percent";
    pub const BURST_X: &str = "--bx";
    pub const BURST_Y: &str = "--by";
    pub const FLOAT_DURATION: &str = "--float-duration";
    pub const FLOAT_DISTANCE: &str = "--float-distance";
    pub const BOUNCE_SPEED: &str = "--bounce-speed";
    pub const EXPLOSION_SIZE: &str = "--heart-explosion-size";
}
