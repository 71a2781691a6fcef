//! Global CSS styles for Showcase.
//!
//! Every color is a `--color-*` custom property set inline on `.app`.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  /* Type Scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;
  --text-3xl: 3.25rem;

  /* Spacing */
  --radius: 14px;
  --section-gap: 5rem;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-theme: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

body {
  font-family: var(--font-sans);
  line-height: 1.6;
  min-height: 100vh;
}

/* === App Root === */
.app {
  min-height: 100vh;
  background: var(--color-background);
  color: var(--color-text);
  transition: background var(--transition-theme), color var(--transition-theme);
}

.landing {
  max-width: 1040px;
  margin: 0 auto;
  padding: 0 2rem;
}

/* === Buttons === */
.btn-primary,
.btn-outline,
.btn-ghost {
  font-family: var(--font-sans);
  font-size: var(--text-base);
  font-weight: 600;
  border-radius: 999px;
  padding: 0.75rem 1.75rem;
  cursor: pointer;
  transition: transform var(--transition-fast), box-shadow var(--transition-fast),
    background var(--transition-theme), color var(--transition-theme);
}

.btn-primary {
  background: var(--color-primary);
  color: var(--color-background);
  border: 1px solid var(--color-primary);
}

.btn-primary:hover {
  transform: translateY(-1px);
  box-shadow: 0 6px 20px -8px var(--color-primary);
}

.btn-outline {
  background: transparent;
  color: var(--color-primary);
  border: 1px solid var(--color-primary);
}

.btn-ghost {
  background: transparent;
  color: var(--color-text-muted);
  border: 1px solid transparent;
}

.btn-ghost:hover {
  color: var(--color-text);
}

/* === Theme Toggle === */
.theme-toggle {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  font-family: var(--font-mono);
  font-size: var(--text-sm);
  color: var(--color-text);
  background: var(--color-background-alt);
  border: 1px solid var(--color-text-muted);
  border-radius: 999px;
  padding: 0.4rem 0.9rem;
  cursor: pointer;
  transition: border-color var(--transition-fast);
}

.theme-toggle:hover {
  border-color: var(--color-primary);
}

.theme-toggle__glyph {
  font-size: var(--text-lg);
  line-height: 1;
}

/* === Header === */
.app-header {
  position: sticky;
  top: 0;
  z-index: 10;
  background: var(--color-background);
  border-bottom: 1px solid var(--color-background-alt);
  transition: background var(--transition-theme);
}

.app-header__inner {
  max-width: 1040px;
  margin: 0 auto;
  padding: 1rem 2rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.app-header__brand {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  color: var(--color-text);
  text-decoration: none;
}

.app-header__name {
  font-size: var(--text-xl);
  font-weight: 700;
}

.logo {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 2.5rem;
  height: 2.5rem;
  border-radius: 10px;
  background: linear-gradient(135deg, var(--color-primary), var(--color-secondary));
  font-size: var(--text-lg);
}

/* === Hero === */
.hero {
  text-align: center;
  padding: 5rem 0 var(--section-gap);
}

.hero__title {
  font-size: var(--text-3xl);
  font-weight: 800;
  letter-spacing: -0.02em;
  background: linear-gradient(120deg, var(--color-primary), var(--color-secondary), var(--color-accent));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.hero__tagline {
  max-width: 36rem;
  margin: 1.25rem auto 2.5rem;
  font-size: var(--text-lg);
  color: var(--color-text-muted);
}

.hero__actions {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 1rem;
}

/* === Sections === */
.section {
  padding: var(--section-gap) 0 0;
}

.section__title {
  font-size: var(--text-2xl);
  font-weight: 700;
  margin-bottom: 0.5rem;
}

.section__header {
  text-align: center;
}

.section__lead {
  color: var(--color-text-muted);
  margin-bottom: 2rem;
}

.palette__mode {
  font-family: var(--font-mono);
  font-size: var(--text-sm);
  color: var(--color-text-muted);
  margin-bottom: 1rem;
}

/* === Palette === */
.palette__grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(150px, 1fr));
  gap: 1rem;
}

.swatch {
  background: var(--color-background-alt);
  border-radius: var(--radius);
  padding: 0.5rem;
}

.swatch__chip {
  display: flex;
  align-items: flex-end;
  height: 88px;
  border-radius: calc(var(--radius) - 4px);
  padding: 0.5rem 0.75rem;
  transition: background var(--transition-theme);
}

.swatch__value {
  font-family: var(--font-mono);
  font-size: var(--text-xs);
}

.swatch__role {
  font-family: var(--font-mono);
  font-size: var(--text-sm);
  color: var(--color-text-muted);
  padding: 0.5rem 0.25rem 0.25rem;
}

/* === Pipeline === */
.pipeline__list {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: 0;
}

.pipeline-step {
  position: relative;
  display: flex;
  gap: 1.5rem;
  padding-bottom: 2rem;
}

.pipeline-step::after {
  content: '';
  position: absolute;
  left: 1.375rem;
  top: 2.75rem;
  bottom: 0.25rem;
  width: 2px;
  background: var(--color-background-alt);
}

.pipeline-step.last::after {
  display: none;
}

.pipeline-step__number {
  flex: 0 0 2.75rem;
  height: 2.75rem;
  display: flex;
  align-items: center;
  justify-content: center;
  font-family: var(--font-mono);
  font-weight: 700;
  color: var(--color-primary);
  border: 2px solid var(--color-primary);
  border-radius: 50%;
}

.pipeline-step.active .pipeline-step__number {
  background: var(--color-primary);
  color: var(--color-background);
}

.pipeline-step__title {
  font-size: var(--text-lg);
  font-weight: 600;
}

.pipeline-step__body {
  color: var(--color-text-muted);
}

/* === Features === */
.features__grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
  gap: 1.25rem;
}

.feature-card {
  background: var(--color-background-alt);
  border-radius: var(--radius);
  padding: 1.75rem;
  transition: transform var(--transition-fast), background var(--transition-theme);
}

.feature-card:hover {
  transform: translateY(-3px);
}

.feature-card__icon {
  font-size: var(--text-2xl);
  color: var(--color-accent);
  margin-bottom: 0.75rem;
}

.feature-card__title {
  font-size: var(--text-lg);
  font-weight: 600;
  margin-bottom: 0.5rem;
}

.feature-card__body {
  color: var(--color-text-muted);
  font-size: var(--text-sm);
}

/* === Footer === */
.site-footer {
  margin-top: var(--section-gap);
  padding: 2.5rem 2rem 1.5rem;
  background: var(--color-background-alt);
  font-size: var(--text-sm);
  color: var(--color-text-muted);
}

.site-footer__top {
  max-width: 1040px;
  margin: 0 auto;
  display: flex;
  flex-wrap: wrap;
  justify-content: space-between;
  align-items: center;
  gap: 1rem;
}

.site-footer__brand {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  font-size: var(--text-lg);
  font-weight: 700;
  color: var(--color-text);
  margin-bottom: 0.5rem;
}

.site-footer__bottom {
  max-width: 1040px;
  margin: 2rem auto 0;
  padding-top: 1.5rem;
  border-top: 1px solid var(--color-background);
  text-align: center;
  font-size: var(--text-xs);
}

.site-footer__links {
  display: flex;
  gap: 1.5rem;
}

.site-footer__link {
  color: var(--color-primary);
  text-decoration: none;
}

.site-footer__link:hover {
  text-decoration: underline;
}

/* === Responsive === */
@media (max-width: 640px) {
  .landing {
    padding: 0 1.25rem;
  }

  .app-header__inner {
    padding: 0.75rem 1.25rem;
  }

  .hero {
    padding-top: 3rem;
  }

  .hero__title {
    font-size: var(--text-2xl);
  }
}
"#;
