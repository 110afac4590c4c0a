use yew::prelude::*;

use crate::components::contact_form::ContactSection;
use crate::components::counter::Counter;
use crate::components::hero::Hero;
use crate::components::navbar::Navbar;
use crate::components::portfolio::Portfolio;
use crate::components::reveal::{Reveal, RevealVariant};
use crate::components::smooth_scroll::use_smooth_scroll;
use crate::config::CONTACT_EMAIL;
use crate::content::{portfolio_items, NAV_LINKS, PORTFOLIO_FILTERS, SERVICES, STATS};

#[function_component]
pub fn Home() -> Html {
    use_smooth_scroll();
    let items = use_memo(|_| portfolio_items(), ());

    html! {
        <>
            <Navbar links={NAV_LINKS} />
            <Hero />

            <section id="about" class="about">
                <div class="container about-grid">
                    <Reveal variant={RevealVariant::Left} class={classes!("about-image")}>
                        <img src="assets/images/about.jpg" alt="Tim Gilput Design" loading="lazy" />
                    </Reveal>
                    <Reveal variant={RevealVariant::Right} class={classes!("about-text")}>
                        <span class="section-tag">{"Tentang Kami"}</span>
                        <h2>{"Desain yang Tumbuh Bersama Anda"}</h2>
                        <p>{"CV. Gilput Design adalah studio desain interior dan arsitektur yang percaya bahwa setiap ruang punya cerita. Kami mendampingi klien dari konsep, visualisasi, hingga pelaksanaan."}</p>
                        <p>{"Pendekatan kami sederhana: dengarkan kebutuhan, rancang dengan teliti, dan kerjakan dengan rapi."}</p>
                    </Reveal>
                </div>
            </section>

            <section id="services" class="services">
                <div class="container">
                    <Reveal class={classes!("section-header")}>
                        <span class="section-tag">{"Layanan"}</span>
                        <h2>{"Apa yang Kami Kerjakan"}</h2>
                    </Reveal>
                    <div class="services-grid">
                        { for SERVICES.iter().map(|service| html! {
                            <Reveal class={classes!("service-card")}>
                                <i class={classes!("fas", service.icon)}></i>
                                <h3>{service.title}</h3>
                                <p>{service.description}</p>
                            </Reveal>
                        }) }
                    </div>
                </div>
            </section>

            <section id="portfolio" class="portfolio">
                <div class="container">
                    <Reveal class={classes!("section-header")}>
                        <span class="section-tag">{"Portfolio"}</span>
                        <h2>{"Proyek Pilihan"}</h2>
                    </Reveal>
                    <Portfolio items={items} filters={PORTFOLIO_FILTERS} />
                </div>
            </section>

            <section id="stats" class="stats">
                <div class="container stats-grid">
                    { for STATS.iter().map(|stat| html! {
                        <Reveal class={classes!("stat-item")}>
                            <h3><Counter id={stat.id} text={stat.value} /></h3>
                            <p>{stat.label}</p>
                        </Reveal>
                    }) }
                </div>
            </section>

            <section id="contact" class="contact">
                <div class="container contact-grid">
                    <Reveal variant={RevealVariant::Left} class={classes!("contact-info")}>
                        <span class="section-tag">{"Kontak"}</span>
                        <h2>{"Mari Wujudkan Ruang Impian Anda"}</h2>
                        <p><i class="fas fa-envelope"></i>{" "}{CONTACT_EMAIL}</p>
                        <p><i class="fas fa-map-marker-alt"></i>{" Indonesia"}</p>
                    </Reveal>
                    <Reveal variant={RevealVariant::Right} class={classes!("contact-form-wrapper")}>
                        <ContactSection />
                    </Reveal>
                </div>
            </section>

            <footer class="footer">
                <div class="container">
                    <p>{"© CV. Gilput Design. All rights reserved."}</p>
                </div>
            </footer>
        </>
    }
}
