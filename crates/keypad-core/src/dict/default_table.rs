// Generated by `dictool gen` from a frequency-ordered English word list.
// Sorted by key sequence; entries sharing a sequence keep frequency order.

use super::T9Entry;

pub(super) static ENTRIES: [T9Entry; 509] = [
    T9Entry::new("2", "a"),
    T9Entry::new("2225", "back"),
    T9Entry::new("2253", "able"),
    T9Entry::new("2255", "call"),
    T9Entry::new("226", "can"),
    T9Entry::new("2263", "came"),
    T9Entry::new("22683", "above"),
    T9Entry::new("22688", "about"),
    T9Entry::new("227", "car"),
    T9Entry::new("2273", "care"),
    T9Entry::new("2273", "base"),
    T9Entry::new("22779", "carry"),
    T9Entry::new("228", "act"),
    T9Entry::new("22873", "cause"),
    T9Entry::new("23", "be"),
    T9Entry::new("232889", "beauty"),
    T9Entry::new("233", "add"),
    T9Entry::new("2336", "been"),
    T9Entry::new("233673", "before"),
    T9Entry::new("23426", "began"),
    T9Entry::new("23446", "begin"),
    T9Entry::new("234463", "behind"),
    T9Entry::new("236837", "center"),
    T9Entry::new("2378", "best"),
    T9Entry::new("2378246", "certain"),
    T9Entry::new("23837", "after"),
    T9Entry::new("238837", "better"),
    T9Entry::new("2389336", "between"),
    T9Entry::new("24246", "again"),
    T9Entry::new("2424678", "against"),
    T9Entry::new("242643", "change"),
    T9Entry::new("24325", "check"),
    T9Entry::new("244", "big"),
    T9Entry::new("24453736", "children"),
    T9Entry::new("246", "ago"),
    T9Entry::new("247", "air"),
    T9Entry::new("2473", "bird"),
    T9Entry::new("2489", "city"),
    T9Entry::new("25225", "black"),
    T9Entry::new("25277", "class"),
    T9Entry::new("25327", "clear"),
    T9Entry::new("255", "all"),
    T9Entry::new("25673", "close"),
    T9Entry::new("2576", "also"),
    T9Entry::new("2583", "blue"),
    T9Entry::new("259297", "always"),
    T9Entry::new("26", "an"),
    T9Entry::new("2628", "boat"),
    T9Entry::new("263", "and"),
    T9Entry::new("2639", "body"),
    T9Entry::new("264625", "animal"),
    T9Entry::new("2653", "cold"),
    T9Entry::new("26567", "color"),
    T9Entry::new("2663", "come"),
    T9Entry::new("2665", "book"),
    T9Entry::new("26664", "among"),
    T9Entry::new("266666", "common"),
    T9Entry::new("26675383", "complete"),
    T9Entry::new("2668246", "contain"),
    T9Entry::new("2677328", "correct"),
    T9Entry::new("267937", "answer"),
    T9Entry::new("26837", "cover"),
    T9Entry::new("2684", "both"),
    T9Entry::new("26853", "could"),
    T9Entry::new("2686879", "country"),
    T9Entry::new("268773", "course"),
    T9Entry::new("269", "any"),
    T9Entry::new("269", "boy"),
    T9Entry::new("269", "box"),
    T9Entry::new("27", "as"),
    T9Entry::new("273", "are"),
    T9Entry::new("2732", "area"),
    T9Entry::new("27464", "bring"),
    T9Entry::new("275", "ask"),
    T9Entry::new("27677", "cross"),
    T9Entry::new("2768448", "brought"),
    T9Entry::new("277327", "appear"),
    T9Entry::new("279", "cry"),
    T9Entry::new("28", "at"),
    T9Entry::new("28453", "build"),
    T9Entry::new("2879", "busy"),
    T9Entry::new("288", "but"),
    T9Entry::new("288", "cut"),
    T9Entry::new("29", "by"),
    T9Entry::new("3223", "face"),
    T9Entry::new("3224", "each"),
    T9Entry::new("3228", "fact"),
    T9Entry::new("3255", "fall"),
    T9Entry::new("326459", "family"),
    T9Entry::new("327", "far"),
    T9Entry::new("3273", "ease"),
    T9Entry::new("3275", "dark"),
    T9Entry::new("32759", "early"),
    T9Entry::new("3276", "farm"),
    T9Entry::new("3278", "fast"),
    T9Entry::new("3278", "east"),
    T9Entry::new("32784", "earth"),
    T9Entry::new("328", "eat"),
    T9Entry::new("328437", "father"),
    T9Entry::new("329", "day"),
    T9Entry::new("332433", "decide"),
    T9Entry::new("3335", "feel"),
    T9Entry::new("3337", "deep"),
    T9Entry::new("3338", "feet"),
    T9Entry::new("3383567", "develop"),
    T9Entry::new("339", "few"),
    T9Entry::new("343", "did"),
    T9Entry::new("343337", "differ"),
    T9Entry::new("34353", "field"),
    T9Entry::new("344873", "figure"),
    T9Entry::new("3455", "fill"),
    T9Entry::new("34625", "final"),
    T9Entry::new("3463", "find"),
    T9Entry::new("3463", "fine"),
    T9Entry::new("3473", "fire"),
    T9Entry::new("347328", "direct"),
    T9Entry::new("3474", "fish"),
    T9Entry::new("34778", "first"),
    T9Entry::new("3478268", "distant"),
    T9Entry::new("3483", "five"),
    T9Entry::new("359", "fly"),
    T9Entry::new("36", "do"),
    T9Entry::new("363", "end"),
    T9Entry::new("3637", "does"),
    T9Entry::new("364", "dog"),
    T9Entry::new("365569", "follow"),
    T9Entry::new("3663", "food"),
    T9Entry::new("3663", "done"),
    T9Entry::new("3667", "door"),
    T9Entry::new("3668", "foot"),
    T9Entry::new("366844", "enough"),
    T9Entry::new("367", "for"),
    T9Entry::new("36723", "force"),
    T9Entry::new("3676", "form"),
    T9Entry::new("36863", "found"),
    T9Entry::new("3687", "four"),
    T9Entry::new("3696", "down"),
    T9Entry::new("3729", "draw"),
    T9Entry::new("3733", "free"),
    T9Entry::new("374363", "friend"),
    T9Entry::new("37483", "drive"),
    T9Entry::new("3766", "from"),
    T9Entry::new("37668", "front"),
    T9Entry::new("378283", "equate"),
    T9Entry::new("379", "dry"),
    T9Entry::new("3836", "even"),
    T9Entry::new("3837", "ever"),
    T9Entry::new("38379", "every"),
    T9Entry::new("3855", "full"),
    T9Entry::new("387464", "during"),
    T9Entry::new("3926753", "example"),
    T9Entry::new("393", "eye"),
    T9Entry::new("4", "i"),
    T9Entry::new("423", "had"),
    T9Entry::new("4253", "half"),
    T9Entry::new("4263", "hand"),
    T9Entry::new("4263", "game"),
    T9Entry::new("427", "has"),
    T9Entry::new("4273", "hard"),
    T9Entry::new("427736", "happen"),
    T9Entry::new("4283", "have"),
    T9Entry::new("4283", "gave"),
    T9Entry::new("43", "he"),
    T9Entry::new("43", "if"),
    T9Entry::new("4323", "head"),
    T9Entry::new("4327", "hear"),
    T9Entry::new("43273", "heard"),
    T9Entry::new("4328", "heat"),
    T9Entry::new("4332", "idea"),
    T9Entry::new("43556", "hello"),
    T9Entry::new("4357", "help"),
    T9Entry::new("437", "her"),
    T9Entry::new("4373", "here"),
    T9Entry::new("438", "get"),
    T9Entry::new("4444", "high"),
    T9Entry::new("446", "him"),
    T9Entry::new("447", "his"),
    T9Entry::new("4475", "girl"),
    T9Entry::new("4483", "give"),
    T9Entry::new("46", "in"),
    T9Entry::new("46", "go"),
    T9Entry::new("4624", "inch"),
    T9Entry::new("4653", "hold"),
    T9Entry::new("4653", "gold"),
    T9Entry::new("4663", "good"),
    T9Entry::new("4663", "home"),
    T9Entry::new("4663", "gone"),
    T9Entry::new("4663", "hood"),
    T9Entry::new("4663", "hoof"),
    T9Entry::new("46773", "horse"),
    T9Entry::new("468", "got"),
    T9Entry::new("468", "hot"),
    T9Entry::new("46837378", "interest"),
    T9Entry::new("468376", "govern"),
    T9Entry::new("4687", "hour"),
    T9Entry::new("46873", "house"),
    T9Entry::new("469", "how"),
    T9Entry::new("47", "is"),
    T9Entry::new("47328", "great"),
    T9Entry::new("47336", "green"),
    T9Entry::new("475263", "island"),
    T9Entry::new("476863", "ground"),
    T9Entry::new("47687", "group"),
    T9Entry::new("4769", "grow"),
    T9Entry::new("48", "it"),
    T9Entry::new("4863733", "hundred"),
    T9Entry::new("5263", "land"),
    T9Entry::new("52648243", "language"),
    T9Entry::new("52743", "large"),
    T9Entry::new("5278", "last"),
    T9Entry::new("5283", "late"),
    T9Entry::new("52844", "laugh"),
    T9Entry::new("529", "lay"),
    T9Entry::new("5323", "lead"),
    T9Entry::new("53276", "learn"),
    T9Entry::new("53283", "leave"),
    T9Entry::new("5337", "keep"),
    T9Entry::new("5338", "left"),
    T9Entry::new("5377", "less"),
    T9Entry::new("538", "let"),
    T9Entry::new("538837", "letter"),
    T9Entry::new("5433", "life"),
    T9Entry::new("54448", "light"),
    T9Entry::new("5453", "like"),
    T9Entry::new("5463", "line"),
    T9Entry::new("5463", "kind"),
    T9Entry::new("5464", "king"),
    T9Entry::new("5478", "list"),
    T9Entry::new("547836", "listen"),
    T9Entry::new("5483", "live"),
    T9Entry::new("548853", "little"),
    T9Entry::new("5639", "knew"),
    T9Entry::new("5664", "long"),
    T9Entry::new("5665", "look"),
    T9Entry::new("5669", "know"),
    T9Entry::new("5683", "love"),
    T9Entry::new("569", "low"),
    T9Entry::new("5878", "just"),
    T9Entry::new("6224463", "machine"),
    T9Entry::new("62326", "ocean"),
    T9Entry::new("6233", "made"),
    T9Entry::new("6246", "main"),
    T9Entry::new("6253", "make"),
    T9Entry::new("625328", "object"),
    T9Entry::new("626", "man"),
    T9Entry::new("6263", "name"),
    T9Entry::new("6269", "many"),
    T9Entry::new("627", "map"),
    T9Entry::new("6275", "mark"),
    T9Entry::new("629", "may"),
    T9Entry::new("63", "of"),
    T9Entry::new("63", "me"),
    T9Entry::new("6326", "mean"),
    T9Entry::new("6327", "near"),
    T9Entry::new("6327873", "measure"),
    T9Entry::new("633", "off"),
    T9Entry::new("6333", "need"),
    T9Entry::new("636", "men"),
    T9Entry::new("6374", "mesh"),
    T9Entry::new("6377243", "message"),
    T9Entry::new("63836", "often"),
    T9Entry::new("63837", "never"),
    T9Entry::new("639", "new"),
    T9Entry::new("6398", "next"),
    T9Entry::new("64", "oh"),
    T9Entry::new("64448", "might"),
    T9Entry::new("64448", "night"),
    T9Entry::new("6453", "mile"),
    T9Entry::new("6463", "mind"),
    T9Entry::new("646883", "minute"),
    T9Entry::new("6477", "miss"),
    T9Entry::new("65", "ok"),
    T9Entry::new("653", "old"),
    T9Entry::new("66", "on"),
    T9Entry::new("66", "no"),
    T9Entry::new("6623", "once"),
    T9Entry::new("663", "one"),
    T9Entry::new("6633", "node"),
    T9Entry::new("6659", "only"),
    T9Entry::new("66639", "money"),
    T9Entry::new("6666", "moon"),
    T9Entry::new("6673", "more"),
    T9Entry::new("6676464", "morning"),
    T9Entry::new("6678", "most"),
    T9Entry::new("66784", "north"),
    T9Entry::new("668", "not"),
    T9Entry::new("6683", "move"),
    T9Entry::new("6683", "note"),
    T9Entry::new("668423", "notice"),
    T9Entry::new("668437", "mother"),
    T9Entry::new("6684464", "nothing"),
    T9Entry::new("6686", "noun"),
    T9Entry::new("66868246", "mountain"),
    T9Entry::new("669", "now"),
    T9Entry::new("67", "or"),
    T9Entry::new("67337", "order"),
    T9Entry::new("6736", "open"),
    T9Entry::new("6824", "much"),
    T9Entry::new("6837", "over"),
    T9Entry::new("68437", "other"),
    T9Entry::new("68584759", "multiply"),
    T9Entry::new("686237", "number"),
    T9Entry::new("6863725", "numeral"),
    T9Entry::new("687", "our"),
    T9Entry::new("68742", "music"),
    T9Entry::new("6878", "must"),
    T9Entry::new("688", "out"),
    T9Entry::new("69", "my"),
    T9Entry::new("696", "own"),
    T9Entry::new("72346", "radio"),
    T9Entry::new("7243", "said"),
    T9Entry::new("7243", "page"),
    T9Entry::new("7243623", "science"),
    T9Entry::new("7246", "rain"),
    T9Entry::new("724665", "school"),
    T9Entry::new("72468", "paint"),
    T9Entry::new("726", "ran"),
    T9Entry::new("7263", "same"),
    T9Entry::new("72737", "paper"),
    T9Entry::new("7277", "pass"),
    T9Entry::new("7278", "part"),
    T9Entry::new("7288376", "pattern"),
    T9Entry::new("729", "say"),
    T9Entry::new("729", "saw"),
    T9Entry::new("732", "sea"),
    T9Entry::new("73224", "reach"),
    T9Entry::new("7323", "read"),
    T9Entry::new("73239", "ready"),
    T9Entry::new("7325", "real"),
    T9Entry::new("732663", "second"),
    T9Entry::new("732673", "record"),
    T9Entry::new("733", "see"),
    T9Entry::new("733", "red"),
    T9Entry::new("7336", "seem"),
    T9Entry::new("7353", "self"),
    T9Entry::new("7363", "send"),
    T9Entry::new("73636237", "remember"),
    T9Entry::new("736753", "people"),
    T9Entry::new("73683623", "sentence"),
    T9Entry::new("737766", "person"),
    T9Entry::new("7378", "rest"),
    T9Entry::new("73783", "serve"),
    T9Entry::new("738", "set"),
    T9Entry::new("7383725", "several"),
    T9Entry::new("74273", "shape"),
    T9Entry::new("7428873", "picture"),
    T9Entry::new("743", "she"),
    T9Entry::new("74323", "piece"),
    T9Entry::new("7433", "side"),
    T9Entry::new("74448", "right"),
    T9Entry::new("7447", "ship"),
    T9Entry::new("74623", "since"),
    T9Entry::new("7464", "sing"),
    T9Entry::new("746753", "simple"),
    T9Entry::new("74678", "short"),
    T9Entry::new("746853", "should"),
    T9Entry::new("7469", "show"),
    T9Entry::new("74837", "river"),
    T9Entry::new("749", "six"),
    T9Entry::new("75223", "place"),
    T9Entry::new("75246", "plain"),
    T9Entry::new("7526", "plan"),
    T9Entry::new("75263", "plane"),
    T9Entry::new("75268", "plant"),
    T9Entry::new("7529", "play"),
    T9Entry::new("7569", "slow"),
    T9Entry::new("76", "so"),
    T9Entry::new("7623", "road"),
    T9Entry::new("7625", "rock"),
    T9Entry::new("76255", "small"),
    T9Entry::new("76468", "point"),
    T9Entry::new("7663", "some"),
    T9Entry::new("7664", "song"),
    T9Entry::new("7666", "room"),
    T9Entry::new("7666", "soon"),
    T9Entry::new("7669", "snow"),
    T9Entry::new("7673", "pose"),
    T9Entry::new("76774253", "possible"),
    T9Entry::new("7678", "port"),
    T9Entry::new("76863", "sound"),
    T9Entry::new("76863", "round"),
    T9Entry::new("76863", "pound"),
    T9Entry::new("76884", "south"),
    T9Entry::new("76937", "power"),
    T9Entry::new("77223", "space"),
    T9Entry::new("7732425", "special"),
    T9Entry::new("77355", "spell"),
    T9Entry::new("77377", "press"),
    T9Entry::new("7762536", "problem"),
    T9Entry::new("7763823", "produce"),
    T9Entry::new("7763828", "product"),
    T9Entry::new("7824", "such"),
    T9Entry::new("78263", "stand"),
    T9Entry::new("7827", "star"),
    T9Entry::new("78278", "start"),
    T9Entry::new("78283", "state"),
    T9Entry::new("7829", "stay"),
    T9Entry::new("78323", "stead"),
    T9Entry::new("7837", "step"),
    T9Entry::new("78378466", "question"),
    T9Entry::new("78425", "quick"),
    T9Entry::new("78455", "still"),
    T9Entry::new("7853", "rule"),
    T9Entry::new("7855", "pull"),
    T9Entry::new("786", "sun"),
    T9Entry::new("786", "run"),
    T9Entry::new("78663", "stood"),
    T9Entry::new("7867", "stop"),
    T9Entry::new("78679", "story"),
    T9Entry::new("7873", "sure"),
    T9Entry::new("7873223", "surface"),
    T9Entry::new("787338", "street"),
    T9Entry::new("787664", "strong"),
    T9Entry::new("788", "put"),
    T9Entry::new("78839", "study"),
    T9Entry::new("797836", "system"),
    T9Entry::new("82253", "table"),
    T9Entry::new("8245", "tail"),
    T9Entry::new("8253", "take"),
    T9Entry::new("8255", "talk"),
    T9Entry::new("83224", "teach"),
    T9Entry::new("8355", "tell"),
    T9Entry::new("836", "ten"),
    T9Entry::new("8372", "verb"),
    T9Entry::new("8378", "test"),
    T9Entry::new("8379", "very"),
    T9Entry::new("8426", "than"),
    T9Entry::new("8428", "that"),
    T9Entry::new("843", "the"),
    T9Entry::new("84347", "their"),
    T9Entry::new("8436", "then"),
    T9Entry::new("8436", "them"),
    T9Entry::new("84373", "there"),
    T9Entry::new("84373", "these"),
    T9Entry::new("8439", "they"),
    T9Entry::new("84464", "thing"),
    T9Entry::new("84465", "think"),
    T9Entry::new("8447", "this"),
    T9Entry::new("8463", "time"),
    T9Entry::new("84673", "those"),
    T9Entry::new("846844", "though"),
    T9Entry::new("8468448", "thought"),
    T9Entry::new("84687263", "thousand"),
    T9Entry::new("8473", "tire"),
    T9Entry::new("84733", "three"),
    T9Entry::new("8476844", "through"),
    T9Entry::new("86", "to"),
    T9Entry::new("86337", "under"),
    T9Entry::new("86423", "voice"),
    T9Entry::new("86438437", "together"),
    T9Entry::new("8648", "unit"),
    T9Entry::new("8653", "told"),
    T9Entry::new("866", "too"),
    T9Entry::new("8665", "took"),
    T9Entry::new("867", "top"),
    T9Entry::new("86845", "until"),
    T9Entry::new("869273", "toward"),
    T9Entry::new("86935", "vowel"),
    T9Entry::new("8696", "town"),
    T9Entry::new("87", "up"),
    T9Entry::new("87", "us"),
    T9Entry::new("872835", "travel"),
    T9Entry::new("873", "use"),
    T9Entry::new("8733", "tree"),
    T9Entry::new("87825", "usual"),
    T9Entry::new("8783", "true"),
    T9Entry::new("879", "try"),
    T9Entry::new("8876", "turn"),
    T9Entry::new("896", "two"),
    T9Entry::new("9248", "wait"),
    T9Entry::new("9255", "walk"),
    T9Entry::new("9268", "want"),
    T9Entry::new("927", "was"),
    T9Entry::new("927", "war"),
    T9Entry::new("9276", "warm"),
    T9Entry::new("92824", "watch"),
    T9Entry::new("92837", "water"),
    T9Entry::new("929", "way"),
    T9Entry::new("93", "we"),
    T9Entry::new("9327", "year"),
    T9Entry::new("9335", "week"),
    T9Entry::new("9355", "well"),
    T9Entry::new("9368", "went"),
    T9Entry::new("937", "yes"),
    T9Entry::new("9373", "were"),
    T9Entry::new("9378", "west"),
    T9Entry::new("9428", "what"),
    T9Entry::new("94335", "wheel"),
    T9Entry::new("9436", "when"),
    T9Entry::new("94373", "where"),
    T9Entry::new("94424", "which"),
    T9Entry::new("94453", "while"),
    T9Entry::new("94483", "white"),
    T9Entry::new("9455", "will"),
    T9Entry::new("946", "who"),
    T9Entry::new("9463", "wind"),
    T9Entry::new("94653", "whole"),
    T9Entry::new("9484", "with"),
    T9Entry::new("949", "why"),
    T9Entry::new("9663", "wood"),
    T9Entry::new("966337", "wonder"),
    T9Entry::new("9673", "word"),
    T9Entry::new("9675", "work"),
    T9Entry::new("96753", "world"),
    T9Entry::new("968", "you"),
    T9Entry::new("96853", "would"),
    T9Entry::new("96864", "young"),
    T9Entry::new("9687", "your"),
    T9Entry::new("97483", "write"),
];
