//! Global CSS styles for HSC Study.
//!
//! Colors come from the palette variables in `colors.rs`.

pub const GLOBAL_STYLES: &str = r#"
/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif;
  line-height: 1.5;
}

.app {
  min-height: 100vh;
  background: var(--bg);
  color: var(--text);
  transition: background 200ms ease, color 200ms ease;
}

/* === Header === */
.nav-header {
  position: sticky;
  top: 0;
  z-index: 10;
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  gap: 1rem;
  padding: 0.75rem 1.5rem;
  background: var(--surface);
  border-bottom: 1px solid var(--border);
}

.nav-brand {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.app-title {
  font-size: 1.25rem;
  font-weight: 700;
  color: var(--accent);
}

.nav-tabs {
  display: flex;
  gap: 0.25rem;
}

.nav-tab {
  padding: 0.4rem 0.9rem;
  border: none;
  border-radius: 999px;
  background: transparent;
  color: var(--muted);
  font: inherit;
  cursor: pointer;
}

.nav-tab:hover { color: var(--text); }

.nav-tab.active {
  background: var(--accent-soft);
  color: var(--accent);
  font-weight: 600;
}

/* === Search === */
.search-input-wrapper {
  display: flex;
  align-items: center;
  gap: 0.4rem;
  margin-left: auto;
}

.input-field {
  padding: 0.45rem 0.75rem;
  border: 1px solid var(--border);
  border-radius: 8px;
  background: var(--bg);
  color: var(--text);
  font: inherit;
  min-width: 16rem;
}

.input-field:focus {
  outline: none;
  border-color: var(--accent);
}

/* === Buttons === */
.btn-primary, .btn-tool, .btn-ghost, .btn-toggle, .icon-btn {
  font: inherit;
  cursor: pointer;
  border-radius: 8px;
}

.btn-primary {
  padding: 0.45rem 1rem;
  border: 1px solid var(--accent);
  background: var(--accent);
  color: #fff;
}

.btn-tool {
  padding: 0.3rem 0.6rem;
  border: 1px solid var(--border);
  background: var(--bg);
  color: var(--text);
  font-size: 0.85rem;
}

.btn-tool:hover { border-color: var(--accent); }

.btn-ghost {
  padding: 0.45rem 1rem;
  border: none;
  background: transparent;
  color: var(--muted);
}

.btn-toggle {
  width: 2.25rem;
  height: 2.25rem;
  border: 1px solid var(--border);
  background: var(--bg);
}

.icon-btn {
  border: none;
  background: transparent;
  color: var(--muted);
  font-size: 1.5rem;
  line-height: 1;
}

/* === Pages === */
.content {
  max-width: 1100px;
  margin: 0 auto;
  padding: 2rem 1.5rem;
}

.hero { margin-bottom: 1.5rem; }

.page-title { font-size: 2rem; }

.tagline { color: var(--muted); }

.progress-card, .overview-tile, .chapter-card {
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: 12px;
  padding: 1.25rem;
}

.progress-card { margin-bottom: 1.5rem; }

.progress-track {
  height: 0.6rem;
  margin: 0.75rem 0 0.4rem;
  border-radius: 999px;
  background: var(--accent-soft);
  overflow: hidden;
}

.progress-fill {
  height: 100%;
  background: var(--accent);
}

.progress-label { color: var(--muted); font-size: 0.9rem; }

.section-overview {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(200px, 1fr));
  gap: 1rem;
}

.overview-tile {
  text-align: left;
  font: inherit;
  color: inherit;
  cursor: pointer;
}

.overview-count { color: var(--muted); }

.section-header { margin-bottom: 1rem; }

.empty-state { color: var(--muted); margin-bottom: 1rem; }

.chapter-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
  gap: 1rem;
}

.chapter-title { font-size: 1.1rem; }

.chapter-author { color: var(--muted); font-style: italic; }

.chapter-summary { margin: 0.5rem 0 1rem; }

.study-tools {
  display: flex;
  flex-wrap: wrap;
  gap: 0.4rem;
}

/* === Modal === */
.modal-overlay {
  position: fixed;
  inset: 0;
  z-index: 100;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(0, 0, 0, 0.5);
}

.modal {
  width: min(900px, 92vw);
  max-height: 88vh;
  overflow-y: auto;
  background: var(--surface);
  border-radius: 14px;
  padding: 1.5rem;
}

.modal-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-bottom: 1rem;
}

.key-points ul { padding-left: 1.25rem; }

.key-points li { margin-bottom: 0.35rem; }

/* === Quiz === */
.mcq-container { margin-bottom: 1.25rem; }

.mcq-question { font-weight: 600; margin-bottom: 0.5rem; }

.mcq-options {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: 0.5rem;
}

.mcq-option {
  padding: 0.5rem 0.75rem;
  border: 1px solid var(--border);
  border-radius: 8px;
  background: var(--bg);
  color: var(--text);
  font: inherit;
  text-align: left;
  cursor: pointer;
}

.mcq-option.correct {
  border-color: var(--correct);
  background: color-mix(in srgb, var(--correct) 18%, transparent);
}

.mcq-option.incorrect {
  border-color: var(--incorrect);
  background: color-mix(in srgb, var(--incorrect) 18%, transparent);
}

.quiz-actions {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.quiz-score { color: var(--muted); }

/* === Flashcards === */
.flash-toolbar {
  display: flex;
  gap: 0.5rem;
  margin-bottom: 1rem;
}

.flashcard {
  height: 150px;
  perspective: 800px;
  cursor: pointer;
}

.flashcard-inner {
  position: relative;
  width: 100%;
  height: 100%;
  transition: transform 400ms ease;
  transform-style: preserve-3d;
}

.flashcard.flipped .flashcard-inner { transform: rotateY(180deg); }

.flashcard-front, .flashcard-back {
  position: absolute;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 1rem;
  border: 1px solid var(--border);
  border-radius: 12px;
  background: var(--bg);
  text-align: center;
  backface-visibility: hidden;
}

.flashcard-back {
  transform: rotateY(180deg);
  background: var(--accent-soft);
}

/* === Mind Map === */
.mindmap p {
  padding: 1rem;
  border-left: 4px solid var(--accent);
  background: var(--accent-soft);
  border-radius: 8px;
}
"#;
