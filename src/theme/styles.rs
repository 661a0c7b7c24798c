//! Global CSS for the portfolio.
//!
//! Colors come from the per-mode custom properties emitted by
//! [`super::colors::palette_css`]; nothing here hard-codes a mode color
//! except the mode-specific flourishes at the bottom.

pub const GLOBAL_STYLES: &str = r#"
/* === Tokens === */
:root {
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;
  --font-fun: 'Comic Neue', 'Comic Sans MS', cursive;

  --radius: 0.75rem;
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  scroll-behavior: smooth;
  -webkit-font-smoothing: antialiased;
}

body {
  min-height: 100vh;
  overflow-x: hidden;
}

a {
  color: inherit;
  text-decoration: none;
}

/* === Root === */
.portfolio-root {
  min-height: 100vh;
  font-family: var(--font-sans);
  background: var(--background);
  color: var(--foreground);
  line-height: 1.6;
  transition: background var(--transition-normal), color var(--transition-normal), filter 500ms ease;
}

.portfolio-root.neon-hacker {
  font-family: var(--font-mono);
}

.portfolio-root.punny-mode {
  font-family: var(--font-fun);
}

.portfolio-root.grayscale {
  filter: grayscale(100%);
}

.portfolio-root.party-mode {
  animation: party-hue 2s linear infinite;
}

@keyframes party-hue {
  from { filter: hue-rotate(0deg) saturate(1.5); }
  to { filter: hue-rotate(360deg) saturate(1.5); }
}

.text-primary { color: var(--primary); }
.text-neon-green { color: var(--neon-green); }
.text-mango { color: var(--mango); }
.text-muted { color: var(--muted); }

/* === Layout === */
.section {
  padding: 5rem 1.5rem;
  max-width: 1100px;
  margin: 0 auto;
}

.section-title {
  font-size: 2.25rem;
  font-weight: 700;
  text-align: center;
  margin-bottom: 0.75rem;
  color: var(--primary);
}

.neon-hacker .section-title {
  text-shadow: 0 0 12px var(--glow);
}

.section-subtitle {
  text-align: center;
  color: var(--muted);
  margin-bottom: 3rem;
}

.grid {
  display: grid;
  gap: 1.5rem;
  grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
}

/* === Navbar === */
.navbar {
  position: sticky;
  top: 0;
  z-index: 40;
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
  padding: 0.75rem 1.5rem;
  background: var(--card);
  border-bottom: 1px solid var(--border);
  backdrop-filter: blur(8px);
}

.navbar-brand {
  font-weight: 700;
  font-size: 1.25rem;
  color: var(--primary);
  cursor: pointer;
}

.navbar-links {
  display: flex;
  gap: 1.25rem;
}

.nav-link {
  background: none;
  border: none;
  color: var(--foreground);
  font: inherit;
  cursor: pointer;
  transition: color var(--transition-fast);
}

.nav-link:hover {
  color: var(--primary);
}

.navbar-actions {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

/* === Buttons === */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  border-radius: var(--radius);
  border: 1px solid transparent;
  font: inherit;
  font-weight: 600;
  cursor: pointer;
  transition: transform var(--transition-fast), box-shadow var(--transition-fast), background var(--transition-fast);
}

.btn:hover { transform: translateY(-1px); }
.btn:disabled { opacity: 0.6; cursor: not-allowed; transform: none; }

.btn-sm { padding: 0.35rem 0.75rem; font-size: 0.85rem; }
.btn-md { padding: 0.6rem 1.2rem; }
.btn-lg { padding: 0.85rem 1.8rem; font-size: 1.1rem; }

.btn-primary {
  background: var(--primary);
  color: var(--primary-foreground);
}

.btn-outline {
  background: transparent;
  color: var(--primary);
  border-color: var(--primary);
}

.btn-secondary {
  background: var(--accent);
  color: var(--foreground);
}

.btn-ghost {
  background: transparent;
  color: var(--foreground);
}

.btn-destructive {
  background: #ef4444;
  color: #ffffff;
}

.neon-border {
  box-shadow: 0 0 8px var(--glow), inset 0 0 4px var(--glow);
  border-color: var(--primary);
}

.wobble:hover {
  animation: wobble 0.6s ease-in-out;
}

@keyframes wobble {
  0%, 100% { transform: rotate(0deg); }
  25% { transform: rotate(-4deg); }
  75% { transform: rotate(4deg); }
}

.icon-btn {
  background: none;
  border: none;
  color: inherit;
  font-size: 1.25rem;
  cursor: pointer;
  line-height: 1;
  padding: 0.25rem;
}

.close-btn {
  font-size: 1.5rem;
  opacity: 0.7;
}

.close-btn:hover { opacity: 1; }

/* === Inputs === */
.input-field {
  width: 100%;
  padding: 0.75rem 1rem;
  border-radius: var(--radius);
  border: 1px solid var(--border);
  background: var(--background);
  color: var(--foreground);
  font: inherit;
}

.input-field:focus {
  outline: none;
  border-color: var(--primary);
  box-shadow: 0 0 0 3px var(--glow);
}

.textarea { resize: vertical; }

/* === Badges === */
.badge {
  display: inline-block;
  padding: 0.2rem 0.65rem;
  border-radius: 999px;
  font-size: 0.8rem;
  border: 1px solid var(--border);
}

.badge-filled {
  background: var(--primary);
  color: var(--primary-foreground);
  border-color: var(--primary);
}

.kbd {
  display: inline-block;
  min-width: 1.75rem;
  padding: 0.15rem 0.45rem;
  border-radius: 0.35rem;
  border: 1px solid var(--border);
  background: var(--card);
  font-family: var(--font-mono);
  text-align: center;
}

/* === Cards === */
.card {
  background: var(--card);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 1.5rem;
}

.flip-card {
  perspective: 1000px;
  min-height: 280px;
  cursor: pointer;
}

.flip-card-inner {
  position: relative;
  width: 100%;
  height: 100%;
  min-height: 280px;
  transition: transform 0.6s;
  transform-style: preserve-3d;
}

.flip-card.flipped .flip-card-inner {
  transform: rotateY(180deg);
}

.flip-card-front, .flip-card-back {
  position: absolute;
  inset: 0;
  backface-visibility: hidden;
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.flip-card-back {
  transform: rotateY(180deg);
  align-items: center;
  justify-content: center;
  text-align: center;
}

.project-emoji { font-size: 2.5rem; }
.project-title { font-size: 1.25rem; font-weight: 700; }
.project-tech { display: flex; flex-wrap: wrap; gap: 0.4rem; }

/* === Hero === */
.hero {
  min-height: 90vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  text-align: center;
  gap: 1.5rem;
  padding: 2rem;
}

.hero-title {
  font-size: 3rem;
  font-weight: 800;
  min-height: 4rem;
}

.typewriter-caret {
  display: inline-block;
  width: 0.1em;
  margin-left: 0.1em;
  background: var(--primary);
  animation: blink 1s step-end infinite;
}

@keyframes blink {
  50% { opacity: 0; }
}

.hero-tagline { font-size: 1.25rem; color: var(--muted); }
.hero-actions { display: flex; gap: 1rem; flex-wrap: wrap; justify-content: center; }
.hero-emojis { display: flex; gap: 1rem; font-size: 2rem; }
.hero-emojis span { animation: bounce 2s ease-in-out infinite; }
.hero-footnote { font-size: 0.85rem; color: var(--muted); }

@keyframes bounce {
  0%, 100% { transform: translateY(0); }
  50% { transform: translateY(-8px); }
}

/* === About === */
.about-grid {
  display: grid;
  gap: 2rem;
  grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
}

.avatar {
  position: relative;
  font-size: 5rem;
  text-align: center;
  cursor: pointer;
  user-select: none;
}

.avatar-hat {
  position: absolute;
  top: -2.25rem;
  left: 50%;
  transform: translateX(-50%);
  font-size: 3rem;
}

.traits { list-style: none; display: flex; flex-direction: column; gap: 0.4rem; }

.timeline { display: flex; flex-direction: column; gap: 1rem; }
.timeline-entry { display: flex; gap: 1rem; align-items: flex-start; }
.timeline-year { font-weight: 700; color: var(--primary); min-width: 3.5rem; }

.skill-bar { margin-bottom: 0.85rem; }
.skill-bar-label { display: flex; justify-content: space-between; font-size: 0.9rem; }
.skill-bar-track { height: 0.5rem; border-radius: 999px; background: var(--border); overflow: hidden; }
.skill-bar-fill { height: 100%; background: var(--primary); transition: width 1s ease; }

/* === Skills === */
.skill-tile {
  text-align: center;
  cursor: pointer;
  transition: transform var(--transition-fast);
}

.skill-tile:hover { transform: scale(1.04); }
.skill-tile.discovered { border-color: var(--primary); }
.skill-icon { font-size: 2.5rem; }
.skill-joke { margin-top: 0.5rem; font-size: 0.9rem; color: var(--muted); }

.confetti {
  position: fixed;
  inset: 0;
  pointer-events: none;
  z-index: 60;
  overflow: hidden;
}

.confetti-piece {
  position: absolute;
  top: -2rem;
  font-size: 1.75rem;
  animation: confetti-fall 3s linear forwards;
}

@keyframes confetti-fall {
  to { transform: translateY(110vh) rotate(540deg); }
}

.secret-egg {
  opacity: 0.08;
  cursor: pointer;
  font-size: 1.25rem;
  transition: opacity var(--transition-normal);
}

.secret-egg:hover { opacity: 1; }

/* === Contact === */
.contact-form {
  max-width: 600px;
  margin: 0 auto;
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.wave {
  display: inline-block;
  animation: wave 0.5s ease-in-out 4;
  transform-origin: 70% 70%;
}

@keyframes wave {
  0%, 100% { transform: rotate(0deg); }
  50% { transform: rotate(20deg); }
}

.socials { display: flex; gap: 1rem; justify-content: center; margin-top: 2rem; }

/* === Resume === */
.resume-actions { display: flex; gap: 1rem; justify-content: center; flex-wrap: wrap; }

/* === Toasts === */
.toast-stack {
  position: fixed;
  right: 1.25rem;
  bottom: 1.25rem;
  z-index: 80;
  display: flex;
  flex-direction: column;
  gap: 0.6rem;
  max-width: 360px;
}

.toast {
  display: flex;
  gap: 0.75rem;
  align-items: flex-start;
  padding: 0.85rem 1rem;
  border-radius: var(--radius);
  background: var(--card);
  color: var(--foreground);
  border: 1px solid var(--border);
  box-shadow: 0 8px 24px rgba(0, 0, 0, 0.15);
  animation: toast-in 200ms ease-out;
}

.toast-body { flex: 1; }
.toast-title { font-weight: 700; }
.toast-description { font-size: 0.9rem; color: var(--muted); }
.toast-achievement { border-color: var(--accent); }
.toast-warning { border-color: #f59e0b; }
.toast-alert { border-color: #ef4444; }

@keyframes toast-in {
  from { opacity: 0; transform: translateY(8px); }
  to { opacity: 1; transform: translateY(0); }
}

/* === Modal === */
.modal-backdrop {
  position: fixed;
  inset: 0;
  z-index: 70;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(0, 0, 0, 0.55);
}

.modal-panel {
  background: var(--card);
  color: var(--foreground);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 1.5rem;
  width: min(480px, 92vw);
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.modal-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.modal-title { font-size: 1.2rem; }

.shortcut-list { list-style: none; display: flex; flex-direction: column; gap: 0.6rem; }
.shortcut-row { display: flex; align-items: center; gap: 0.75rem; }

/* === Achievements === */
.achievement-progress {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  cursor: pointer;
  font-size: 0.85rem;
}

.progress-track {
  width: 80px;
  height: 0.4rem;
  border-radius: 999px;
  background: var(--border);
  overflow: hidden;
}

.progress-fill { height: 100%; background: var(--accent); }

.achievement-card {
  display: flex;
  gap: 1rem;
  align-items: center;
  padding: 1rem 1.25rem;
  border-radius: var(--radius);
  border: 1px solid var(--border);
  background: var(--card);
}

.achievement-card.locked { opacity: 0.55; }
.achievement-card.unlocked { border-color: var(--accent); }
.achievement-icon { font-size: 2rem; }
.achievement-title { font-weight: 700; }
.achievement-description { font-size: 0.9rem; color: var(--muted); }
.achievement-status { font-size: 0.8rem; margin-top: 0.25rem; }

.analytics { margin-top: 2.5rem; text-align: center; color: var(--muted); }

/* === Floating jokes === */
.joke-bubble {
  position: fixed;
  z-index: 30;
  font-size: 2rem;
  cursor: pointer;
  animation: float 6s ease-in-out infinite;
  user-select: none;
}

@keyframes float {
  0%, 100% { transform: translateY(0); }
  50% { transform: translateY(-14px); }
}

/* === Cursor trail === */
.trail-particle {
  position: fixed;
  z-index: 90;
  pointer-events: none;
  font-size: 0.9rem;
  transform: translate(-50%, -50%);
}

/* === Fake-crash intro === */
.crash-intro {
  position: fixed;
  inset: 0;
  z-index: 100;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 2rem;
  background: #000000;
  color: #39ff14;
  font-family: var(--font-mono);
}

.crash-text { font-size: 1.5rem; text-align: center; padding: 0 1rem; }
.crash-text.error { color: #ff3366; animation: glitch 0.3s steps(2) infinite; }

@keyframes glitch {
  0% { transform: translate(0); }
  50% { transform: translate(-2px, 1px); }
  100% { transform: translate(2px, -1px); }
}

.crash-skip {
  background: none;
  border: 1px solid #39ff14;
  color: #39ff14;
  padding: 0.4rem 1rem;
  font-family: var(--font-mono);
  cursor: pointer;
}
"#;
