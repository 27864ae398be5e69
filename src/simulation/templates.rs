pub const EXCELLENT_TEMPLATE: &str = r#"Como experto en el tema que has definido, he analizado con cuidado tu solicitud.

Partiendo del contexto concreto que proporcionaste y de las restricciones que mencionaste, esta es mi respuesta detallada:

[Aquí iría una respuesta muy personalizada y específica. La IA dispondría de toda la información necesaria para contestar con precisión.]

Tu prompt fue claro y completo, así que pude entender exactamente qué necesitas y cómo estructurar la respuesta.

¿Quieres que profundice o ajuste algún punto?"#;

pub const GOOD_TEMPLATE: &str = r#"He procesado tu solicitud. Esta es mi respuesta:

[Aquí iría una respuesta relevante, aunque mejorable. La IA tiene información suficiente para ser útil, pero algunos detalles más aumentarían la precisión.]

Tu prompt incluye elementos importantes, aunque añadir más detalles sobre {criterion} podría generar una respuesta más precisa.

¿Necesitas que ajuste algo?"#;

pub const FAIR_TEMPLATE: &str = r#"Entiendo que necesitas ayuda con: "{excerpt}"

[Aquí iría una respuesta genérica. La IA tendría que suponer qué necesitas porque el prompt no da suficiente información.]

Para darte una respuesta más útil y específica, convendría que incluyeras:
{suggestions}

Así podría entender mejor lo que buscas."#;

pub const NEEDS_IMPROVEMENT_TEMPLATE: &str = r#"He recibido tu mensaje, pero necesito más información para ayudarte de verdad.

[La respuesta sería vaga y general porque el prompt no aporta contexto ni especificaciones.]

Para poder ayudarte mejor, considera lo siguiente:

{suggestions}

Un prompt bien estructurado me permite darte exactamente lo que necesitas. ¿Podrías añadir más detalles?"#;

/// Substituted into the good template when no criterion is failing.
pub const FALLBACK_CRITERION: &str = "algunos aspectos";
