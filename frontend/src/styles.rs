pub const PAGE: &str = "h-full w-full flex flex-col items-center justify-between relative overflow-hidden bg-transparent animate-page-entry px-6 pt-6 pb-4";
pub const GLOW_TOP: &str = "absolute top-[10%] left-[-10%] w-[60%] h-[40%] bg-[#c8a45d]/5 blur-[120px] rounded-full pointer-events-none z-0";
pub const GLOW_BOTTOM: &str = "absolute bottom-[5%] right-[-10%] w-[50%] h-[30%] bg-[#c8a45d]/3 blur-[100px] rounded-full pointer-events-none z-0";
pub const HEADER: &str = "w-full flex flex-col items-center z-10 animate-header-entry shrink-0";
pub const TITLE: &str = "font-bodoni text-2xl sm:text-4xl font-light tracking-[0.4em] text-[#e6e6e6] mb-1 uppercase text-center gold-shine";
pub const SUBTITLE: &str = "text-[#9a9a9a] tracking-[0.4em] font-montserrat text-[6px] sm:text-[7px] uppercase font-bold";
pub const RULE: &str = "w-6 h-[0.5px] bg-[#c8a45d]/20";
pub const MAIN: &str = "flex-1 w-full min-h-0 flex flex-col items-center justify-center z-10 relative py-4 sm:py-8";
pub const WHEEL_WRAPPER: &str = "w-full h-full max-w-[420px] max-h-[420px] flex items-center justify-center transition-all duration-1000 animate-float-container";
pub const WHEEL_WRAPPER_HIDDEN: &str = "scale-75 opacity-0 blur-3xl pointer-events-none";
pub const WHEEL_WRAPPER_SHOWN: &str = "scale-100 opacity-100";
pub const FOOTER: &str = "w-full flex flex-col items-center gap-4 sm:gap-6 z-10 shrink-0";
pub const FOOTNOTE: &str = "text-[#4d4d4d] font-montserrat text-[6px] tracking-[1em] font-medium uppercase mb-2";

pub const SPIN_BUTTON: &str = "relative w-full py-3 sm:py-4 rounded-full font-montserrat text-[9px] sm:text-[10px] tracking-[0.4em] font-bold uppercase transition-all duration-500 overflow-hidden border";
pub const SPIN_BUTTON_ACTIVE: &str = "bg-gradient-to-b from-[#2a2a2a] via-[#1a1a1a] to-[#0a0a0a] text-[#c8a45d] border-[#c8a45d]/30 shadow-[0_15px_40px_rgba(0,0,0,0.6)] active:scale-95 hover:-translate-y-0.5 animate-btn-pulse";
pub const SPIN_BUTTON_DISABLED: &str = "bg-[#1a1a1a] text-[#4d4d4d] border-[#333333] cursor-not-allowed shadow-none";

pub const MODAL_OVERLAY: &str = "fixed inset-0 z-50 flex items-center justify-center p-4 bg-black/98 backdrop-blur-3xl transition-opacity duration-1000 overflow-hidden";
pub const MODAL_CARD: &str = "relative w-full max-w-[360px] bg-[#030706] border border-[#cfa24d]/40 rounded-[24px] sm:rounded-[30px] overflow-hidden shadow-[0_0_150px_rgba(207,162,77,0.2)] p-1 text-center transition-all duration-1000 transform";
pub const MODAL_INNER: &str = "relative border border-[#cfa24d]/20 rounded-[22px] sm:rounded-[28px] p-6 sm:p-10 flex flex-col items-center";
pub const MODAL_KICKER: &str = "text-[#f3e29f] font-montserrat uppercase tracking-[0.4em] text-[8px] sm:text-[9px] font-bold whitespace-nowrap mb-6 opacity-60";
pub const VOUCHER: &str = "relative w-full aspect-[16/10] bg-[#000] border border-[#cfa24d]/60 rounded-xl p-6 sm:p-8 mb-8 flex flex-col items-center justify-center shadow-[0_20px_50px_rgba(0,0,0,1)] overflow-hidden";
pub const VOUCHER_BADGE: &str = "px-4 py-1.5 bg-[#cfa24d]/20 border border-[#cfa24d]/40 rounded-full text-[8px] text-[#f3e29f] font-montserrat tracking-[0.4em] uppercase mb-6 z-10";
pub const VOUCHER_LABEL: &str = "font-bodoni text-5xl sm:text-6xl font-bold text-[#fff] mb-3 italic z-10 gold-shine";
pub const VOUCHER_CAPTION: &str = "text-[#cfa24d] font-montserrat uppercase tracking-[0.4em] text-[9px] font-medium";
pub const FORTUNE_TEXT: &str = "text-[#f3e29f]/90 font-garamond italic text-lg sm:text-xl leading-relaxed mb-8 max-w-[300px] px-2";
pub const INSTRUCTIONS: &str = "text-[#f3e29f]/60 font-montserrat text-[10px] leading-relaxed mb-8 max-w-[280px]";
pub const CLOSE_BUTTON: &str = "w-full py-4 sm:py-6 bg-gradient-to-b from-[#111] to-[#000] border border-[#cfa24d]/50 rounded-full text-[#f3e29f] font-montserrat font-bold text-[10px] tracking-[0.3em] uppercase active:scale-95 transition-all duration-700";
pub const MODAL_FOOTER: &str = "py-3 sm:py-4 bg-black/60 border-t border-[#cfa24d]/20 text-[#cfa24d]/30 font-montserrat text-[7px] tracking-[0.8em] uppercase whitespace-nowrap px-4";
