pub const SCREEN: &str = "min-h-screen flex flex-col items-center justify-center px-6 py-10 relative overflow-hidden";
pub const SCREEN_SCROLL: &str = "min-h-screen w-full px-4 py-10 relative overflow-hidden";
pub const CONTENT: &str = "max-w-sm w-full text-center relative z-10";
pub const CONTENT_WIDE: &str = "max-w-4xl w-full mx-auto relative z-10";

pub const BG_BLUSH: &str = "bg-gradient-to-b from-pink-50 via-rose-50 to-blue-50";
pub const BG_LAVENDER: &str = "bg-gradient-to-br from-pink-100 via-rose-50 to-purple-100";
pub const BG_VINTAGE: &str = "bg-gradient-to-b from-amber-50 via-orange-50/30 to-rose-50";
pub const BG_NIGHT: &str = "bg-gradient-to-b from-indigo-950 via-purple-900 to-pink-900";

pub const TITLE: &str = "text-4xl font-dancing text-rose-600 mb-3 drop-shadow-sm";
pub const TITLE_LIGHT: &str = "text-4xl font-dancing text-white mb-3 drop-shadow";
pub const SUBTITLE: &str = "text-pink-500 italic mb-8";
pub const TEXT_BODY: &str = "text-gray-600";
pub const TEXT_SMALL: &str = "text-sm text-gray-500";

pub const CARD: &str = "bg-white/80 backdrop-blur-md rounded-3xl p-8 shadow-xl border border-pink-100";
pub const CARD_TILE: &str = "bg-white/60 backdrop-blur-md rounded-3xl overflow-hidden shadow-lg hover:shadow-2xl transition-all duration-300 border border-white/40";

pub const BUTTON_PRIMARY: &str = "inline-flex items-center justify-center px-8 py-3 rounded-full font-semibold text-white bg-gradient-to-r from-pink-500 to-rose-500 hover:from-pink-600 hover:to-rose-600 shadow-lg hover:shadow-xl transform hover:-translate-y-0.5 transition-all duration-300";
pub const BUTTON_SECONDARY: &str = "inline-flex items-center justify-center px-6 py-2 rounded-full font-medium border border-pink-300 text-pink-600 bg-white/70 hover:bg-pink-50 transition-colors duration-200";
pub const BUTTON_DISABLED: &str = "inline-flex items-center justify-center px-8 py-3 rounded-full font-semibold text-white bg-gray-300 cursor-not-allowed";
pub const BUTTON_ROUND: &str = "w-14 h-14 rounded-full flex items-center justify-center bg-gradient-to-b from-pink-400 to-rose-500 text-white text-xl shadow-lg hover:scale-105 transition-transform";

pub const PROGRESS_TRACK: &str = "w-full h-2 bg-pink-100 rounded-full overflow-hidden";
pub const PROGRESS_FILL: &str = "h-full bg-gradient-to-r from-pink-400 to-rose-500 transition-all duration-200";
