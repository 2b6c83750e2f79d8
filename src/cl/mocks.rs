// Published issuer key and proof values. `tests/utils/mod.rs` carries a copy of the key
// for the integration tests.

use super::*;

use crate::bn::BigNumber;

use std::collections::{BTreeMap, BTreeSet, HashMap};

fn bn_map(values: Vec<(&str, BigNumber)>) -> HashMap<String, BigNumber> {
    values
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

pub fn credential_primary_public_key() -> CredentialPrimaryPublicKey {
    CredentialPrimaryPublicKey::new(
        BigNumber::from_dec(
            "97759243037584905475759031285687481526682980378485805322836601695523323795783360\
            75837330206802234043814426088147194760217645558693798125967704354879199910964829\
            61742734785607883095213636365303979127662728653996972557328175772779208146184785\
            01658470763261263481884676603447569204964645509549230753919029312443159670117311\
            67228254215932410952855816790418015706082742497478961661244741714955496768386261\
            49653707087836703431974200095330938680753568144148259763813322875753029825480159\
            54078851835419930170678631436954784177194966259746768016991096084694473538730294\
            363242583864853775574178872006148305847575167695257447773",
        )
        .unwrap(),
        BigNumber::from_dec(
            "21776376592274679371689799030079085312051574992961722927009639996987475353996443\
            83500517310783277599086900933632723850317088119199443200601521203284163768043454\
            31561743138938203533732520358925793056539475415853593843278474754104150164318906\
            30746420522309600510291349365515722702025418921172938767221457239170209659099845\
            31214908778541143958960206654104323567997726270375547417146262246382001612683171\
            06928508377225750307634095184139002327243792123166864197258990864862774450515595\
            17948685502640096519501476907831798027367886642477004142733742445333458277869264\
            615472093824024737975750072900592045563887412129016133889",
        )
        .unwrap(),
        BigNumber::from_dec(
            "20971049306556516416548411855462653126934915528788169742105904685171526036021814\
            02030836659537898569747316029861227962875463243493375909505301474244545324686901\
            45013181321291649542816723668947924117186936857735607739665790529969932597370286\
            89495198784560422879504530423473348349585086897461177376910543665826129373202987\
            76811543000788996805228863787521410868098612383421476862827358541055248807543900\
            11612732070009545063998692099721025665385540062522147272607058389936313492548934\
            30895487478655362331032373744785458381443406082435300178682616238581378757588795\
            672662888045672364001684986862571709608524646032002755410",
        )
        .unwrap(),
        BigNumber::from_dec(
            "22367649113891905664593367589756927154620026002870686791425116899113166102463385\
            25577794761259027232690287660796593039329901770838845601467283309851751040272590\
            65627145173835192242417693700974363602132718010246649731015164596767591210062633\
            27545857171301256844849290876113986609209526369774492299815377779730250971480247\
            12399936123189446265778520183314020688216448173844044590702866196217578003892609\
            59963567314765614475562858655885006668807484403882419885764834288137100936764641\
            03155200711556185738545216528962065908814210434956734336781475483267248489836659\
            903340870985489551641891702996597499832133432061498821350",
        )
        .unwrap(),
        bn_map(vec![
            (
                "master_secret",
                BigNumber::from_dec(
                    "23600278367881514644719111745132596572924159303153307139633714118405395795423872\
                    74823624425384197289629186834423826792057244864126526952454291403775559628171233\
                    51639384289456582161235127640749071853098873376402042193051538248120356184902871\
                    16229003440283175095066796405694857291764977397276381047372374819390263373711696\
                    74879701813142578367413287077676422965720693607688952604566136750857420169094835\
                    51023505590104722974652421111054223143368574029072976470654316555107933658383284\
                    72647947739742691547798197166325138761863258939799970466366588510334716568673188\
                    155525513263380006012778618903312304454922018074803231854",
                )
                .unwrap(),
            ),
            (
                "sex",
                BigNumber::from_dec(
                    "45905420009559506676740152645444004432612926812657234203412778546798509832343930\
                    13891564550282259299748462673956593792466883613536514623545260335752492094632772\
                    98429429968582612050714419062494308309295676099511854476654899825826358340222208\
                    49454430490166326338081626809854393481789706446454118448670097773698201533116892\
                    42449360982706746368803675371075272453302882618121692771565506909900139271542755\
                    82457005683236150924215038743779294852499414215370280752438741015237935854285737\
                    58998843322013892289962647546691990476845851331740934058181529683978648507397291\
                    954190962244181382070900008154042314677569973820640776324",
                )
                .unwrap(),
            ),
            (
                "height",
                BigNumber::from_dec(
                    "94333959363004054149954701059326281900513593795765037129430512246844371745516828\
                    45142870146229994319847710593527570353091699461122165543318128877051200350325958\
                    26150249450878814205225911464072078088431695521400809271328807616274303521733247\
                    50815198666656326457453782222064276842754790048981731781729230479618597274949859\
                    13199522908891641419326219251493136111303428825410973798818244318407321371219155\
                    32521002258417063423372352329786665398713249821572207883830142340389540950516598\
                    09371044131965710184206761214567960637557363959436775713672978576754096054593982\
                    093280224260907034627603504454548602427458662488538122893",
                )
                .unwrap(),
            ),
            (
                "name",
                BigNumber::from_dec(
                    "13746366475344903846235474634926975241638918842587208382474235803812382305623738\
                    39020247241669932531871094781947116439340404665730016043113077759994951236375227\
                    96992555327665206766020877789327825515516422686803619531425479957054772520314706\
                    48760627839338781192638465660242814096792628497668532134733520862819774512844702\
                    28075522838517718182613477071939813961449681833455310230365505882733311259772138\
                    90836777521747615486911469323676254054635520933102819183376457323067264116409959\
                    21029049534049899620621850218350850451959460695298206326084935111318539929976208\
                    421235801491574788159148374603817580856237304789833819817",
                )
                .unwrap(),
            ),
            (
                "age",
                BigNumber::from_dec(
                    "44108535381364140131192122046992150469063899682787071607923270100474406377346334\
                    97492127162460960483105731948930314700521674846043376680372394648596149648359906\
                    17274624469865643373744454334141164048279302710689891863851942138818049681764216\
                    01520426938491670159716567463535602365065230923357872520681039811481068030299506\
                    89942680894442822724993991674074820793795971092087993743634026421237834780797905\
                    80890559237971826845996056841121416259988917221661851248535171392667000907817714\
                    86877208441006637397349202467436687288873815866066132525168536149657142924597017\
                    827004345607609366329623658946277598385003944321738600454",
                )
                .unwrap(),
            ),
        ]),
    )
    .unwrap()
}

/// Revealed `name` of the fixture credential.
pub fn revealed_attrs() -> BTreeMap<String, BigNumber> {
    let mut revealed_attrs = BTreeMap::new();
    revealed_attrs.insert(
        "name".to_string(),
        BigNumber::from_dec("66682250590915135919393234675423675079281389286836524491448775067034910960723").unwrap(),
    );
    revealed_attrs
}

pub fn unrevealed_attrs() -> BTreeSet<String> {
    ["height", "age", "sex"].iter().map(|s| s.to_string()).collect()
}

pub fn eq_proof() -> PrimaryEqualProof {
    PrimaryEqualProof::new(
        BigNumber::from_dec(
            "93850854506025106167175657367900738564840399460457583396522672546367771557204596\
            98605101239638543545026389812312589647485417636778695215489481557355445100474614\
            41396569960442655456139688361767115026028150313922097900957941600453764944711615\
            41029201092195175557986308757797292716881081775201092320235240062158880723682328\
            27246009033125319091932344905350833227018444902610533941309764493451953342903448\
            59826870300176707661074274425015374239859350743673216763744063755667910924279559\
            35956566771002472855738585522175250186544831364686282512410608147641314561395934\
            098066750903464501612432084069923446054698174905994358631",
        )
        .unwrap(),
        BigNumber::from_dec(
            "16208329805373049987853983741579803369642869344989228105219391920751484272597544\
            4071338657195491572547562439622393591965427898285748359108",
        )
        .unwrap(),
        BigNumber::from_dec(
            "24113286342204978330593804006059733173527827453954104931612867826837930186699715\
            80720117287433217230785740609314492439604647151139384359918715471901354803792654\
            93203441002211218757120311064385792274455797457074741542288420192538286547871288\
            11611005814408064785499552797870818899148356173997491730949877919248041842706077\
            57266523181674421831779554477979951608593025201083408261999567548052862132111815\
            08112097818654928169122460464135690611512133363376553662825967455495276836834812\
            52060147183328781031134257503344865203369112751118009852425945138602726607739867\
            26949963737873242238605226780359013336136413704262247986808131712254387705783777\
            81015860719028452471648107174226406996348525110692233661632116547069810544117288\
            75452496134991120924183521771192931679941164546554628144529156965542268390811389\
            53403619715306369872030427136565486175431635627019475785291014367992506289797200\
            35967402306966520999250819096598649121167",
        )
        .unwrap(),
        bn_map(vec![
            (
                "master_secret",
                BigNumber::from_dec(
                    "67940925789970108743024738273926421512152745397724199848594503731042154269417576\
                    66542003068124538949378322564481782668379665735172136349029001616631002350713256\
                    45891049906781822992193062284463162503283028917424577261582986124771881603354514\
                    77126201081347058945471957804431939288091328124225198960258432684399",
                )
                .unwrap(),
            ),
            (
                "sex",
                BigNumber::from_dec(
                    "64616917688349334033265750204391141935009621224474421823754706648355312642628871\
                    23435773676729731478629261405277091910956944655533226659560277758686479462667297\
                    473396368211269136",
                )
                .unwrap(),
            ),
            (
                "height",
                BigNumber::from_dec(
                    "64616917688349334033265728308145166539572310307938375605443547378558034976553004\
                    29843454445497126574195981378365198960707499125538146253636400775219219390979675\
                    126287408712407688",
                )
                .unwrap(),
            ),
            (
                "age",
                BigNumber::from_dec(
                    "64616917688349334033265728308145166539572310307938375605443547378558034976553004\
                    29843454445497126568685843068983890896122000977852186661939211990733462807944627\
                    807336518424313388",
                )
                .unwrap(),
            ),
        ]),
        BigNumber::from_dec(
            "25530308890540348799412195235366721527023591858285468106125643557457596633511653\
            80563310203986319611277915826660660011443138240248924364893067083241825560",
        )
        .unwrap(),
        ["master_secret", "sex", "height", "age"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
    )
}

pub fn predicate() -> Predicate {
    Predicate::new("age", "GE", 18).unwrap()
}

pub fn ne_proof() -> PrimaryPredicateInequalityProof {
    PrimaryPredicateInequalityProof::new(
        bn_map(vec![
            (
                "0",
                BigNumber::from_dec(
                    "64616917688349334033265728308145166539572310307938375605443547378558034976553004\
                    29843454445497126567840955194878756992885557928540339524545643043778980131879253\
                    885097381913472262",
                )
                .unwrap(),
            ),
            (
                "1",
                BigNumber::from_dec(
                    "64616917688349334033265728308145166539572310307938375605443547378558034976553004\
                    29843454445497126567804220939482881605788321274222433127267661785215741754659020\
                    236304375978218300",
                )
                .unwrap(),
            ),
            (
                "2",
                BigNumber::from_dec(
                    "64616917688349334033265728308145166539572310307938375605443547378558034976553004\
                    29843454445497126567804220939482881605788321274222433127267661785215741754659020\
                    236304375978218300",
                )
                .unwrap(),
            ),
            (
                "3",
                BigNumber::from_dec(
                    "64616917688349334033265728308145166539572310307938375605443547378558034976553004\
                    29843454445497126567804220939482881605788321274222433127267661785215741754659020\
                    236304375978218300",
                )
                .unwrap(),
            ),
        ]),
        bn_map(vec![
            (
                "0",
                BigNumber::from_dec(
                    "12905341162187164383200662969981989634181312864080353805295483169419233984105601\
                    13108756798582290425306108955869685395227366233856654792649735912224097611558139\
                    78975395040858448284768983879558733098797166916141548599002059891293510356504482\
                    50109720051667485488862583517744249173604002854032795109223043404276489596878514\
                    83846826461162205002537903920975405118476175947131589471870709350253892921592871\
                    53010741672767655300674509925977361954562369288216136702632406975404793520519740\
                    54103485167987066777788398701571176143460790061905062515783694765611291067682370\
                    88298646216941156526296494287589126706469975404040325634910290392295066762902049\
                    752200300569175726527074032536078980610848985062237596740068429384399305056827",
                )
                .unwrap(),
            ),
            (
                "1",
                BigNumber::from_dec(
                    "12905341162187164383200662969981989634181312864080353805295483169419233984105601\
                    13108756798582290425306108955869685395227366233856654792649735912224097611558139\
                    78975395040858448284768983879558733098797166916141548599002059891293510356504482\
                    50109720051667485488862583517744249173604002854032795109223043404276489596878514\
                    83846826461162205002537903920975405118476175947131589471870709350253892921592871\
                    53010741672767655300674509925977361954562369288216136702632406975404793520519740\
                    54103485167987066777788398701571176143460790061905062515783694765611291067682370\
                    88298646216941156526296494287589126706469975404040325634910290392295066762902049\
                    752200300569175726527074032536078980610848985062237596740068429384399305056827",
                )
                .unwrap(),
            ),
            (
                "2",
                BigNumber::from_dec(
                    "12905341162187164383200662969981989634181312864080353805295483169419233984105601\
                    13108756798582290425306108955869685395227366233856654792649735912224097611558139\
                    78975395040858448284768983879558733098797166916141548599002059891293510356504482\
                    50109720051667485488862583517744249173604002854032795109223043404276489596878514\
                    83846826461162205002537903920975405118476175947131589471870709350253892921592871\
                    53010741672767655300674509925977361954562369288216136702632406975404793520519740\
                    54103485167987066777788398701571176143460790061905062515783694765611291067682370\
                    88298646216941156526296494287589126706469975404040325634910290392295066762902049\
                    752200300569175726527074032536078980610848985062237596740068429384399305056827",
                )
                .unwrap(),
            ),
            (
                "3",
                BigNumber::from_dec(
                    "12905341162187164383200662969981989634181312864080353805295483169419233984105601\
                    13108756798582290425306108955869685395227366233856654792649735912224097611558139\
                    78975395040858448284768983879558733098797166916141548599002059891293510356504482\
                    50109720051667485488862583517744249173604002854032795109223043404276489596878514\
                    83846826461162205002537903920975405118476175947131589471870709350253892921592871\
                    53010741672767655300674509925977361954562369288216136702632406975404793520519740\
                    54103485167987066777788398701571176143460790061905062515783694765611291067682370\
                    88298646216941156526296494287589126706469975404040325634910290392295066762902049\
                    752200300569175726527074032536078980610848985062237596740068429384399305056827",
                )
                .unwrap(),
            ),
            (
                "DELTA",
                BigNumber::from_dec(
                    "12905341162187164383200662969981989634181312864080353805295483169419233984105601\
                    13108756798582290425306108955869685395227366233856654792649735912224097611558139\
                    78975395040858448284768983879558733098797166916141548599002059891293510356504482\
                    50109720051667485488862583517744249173604002854032795109223043404276489596878514\
                    83846826461162205002537903920975405118476175947131589471870709350253892921592871\
                    53010741672767655300674509925977361954562369288216136702632406975404793520519740\
                    54103485167987066777788398701571176143460790061905062515783694765611291067682370\
                    88298646216941156526296494287589126706469975404040325634910290392295066762902049\
                    752200300569175726527074032536078980610848985062237596740068429384399305056827",
                )
                .unwrap(),
            ),
        ]),
        BigNumber::from_dec(
            "64616917688349334033265728308145166539572310307938375605443547378558034976553004\
            29843454445497126568685843068983890896122000977852186661939211990733462807944627\
            807336518424313388",
        )
        .unwrap(),
        BigNumber::from_dec(
            "15019832071918025992746443764672619814038193111378331515587108416842661492145380\
            30607889414258960271957272186887627816768141656866082692501025244322718770894556\
            94432118552076117907256681489738989845054817163935976145196749003812278293329265\
            74199756037552484050924402042168089180098923015834621320789917504940014743171534\
            98358990997340495109970453013797446807685410530069803925906385097926085280963551\
            75571472286717477941938468129255766962244304800618816516478326782427298439146709\
            11122013426552560465450646733551042536367827359597663871827964634864281046557244\
            83043555197609526052019834377688677565160621304206985285466125819599160767740963\
            87067414042112019715114639231648363712167566939541293904978707983348045684675716\
            44016689534705243099458035791551892923659589930766121987359966906294865968827326\
            523859020776548628352137573907151416719",
        )
        .unwrap(),
        bn_map(vec![
            (
                "0",
                BigNumber::from_dec(
                    "43417630723399995147405704831160043226699738088974193922655952212791839159754229\
                    69468661255617106929116409837167580671339452876438070996177796084103861519554580\
                    79270686992406981859360549360589872707232466172258074738537787665530047980728951\
                    22353570790092748990750480624057398606328445597615405248766964525613248873555789\
                    41369759978048402562851274452116320229572734298284731159607710708289335116846605\
                    46568923207385664991988636059868055073182529619369851650716957517336742729636807\
                    49928972044675415743646575121033161921861708756912378060863266945905724585703789\
                    710405474198524740599479287511121708188363170466265186645",
                )
                .unwrap(),
            ),
            (
                "1",
                BigNumber::from_dec(
                    "36722226848982314680567811997771062638383828354047012538919806599939999127160456\
                    44723722636895039349643996266699245903369831112473374408396371116639347080395529\
                    09713819112745071939817093875055231913681171870740913846469243467006389731738077\
                    22733727281592410397831676026466279786567075569837905995849670457506509424137093\
                    86966105073759644626200845783961976687479804946160006586228159285618762293997847\
                    54374792644846972845709037139195462058553174757015203202626817494199067460188123\
                    43025594374083863097715974951329849978864273409720176255874977432080252739943546\
                    406857149724432737271924184396597489413743665435203185036",
                )
                .unwrap(),
            ),
            (
                "2",
                BigNumber::from_dec(
                    "36722226848982314680567811997771062638383828354047012538919806599939999127160456\
                    44723722636895039349643996266699245903369831112473374408396371116639347080395529\
                    09713819112745071939817093875055231913681171870740913846469243467006389731738077\
                    22733727281592410397831676026466279786567075569837905995849670457506509424137093\
                    86966105073759644626200845783961976687479804946160006586228159285618762293997847\
                    54374792644846972845709037139195462058553174757015203202626817494199067460188123\
                    43025594374083863097715974951329849978864273409720176255874977432080252739943546\
                    406857149724432737271924184396597489413743665435203185036",
                )
                .unwrap(),
            ),
            (
                "3",
                BigNumber::from_dec(
                    "36722226848982314680567811997771062638383828354047012538919806599939999127160456\
                    44723722636895039349643996266699245903369831112473374408396371116639347080395529\
                    09713819112745071939817093875055231913681171870740913846469243467006389731738077\
                    22733727281592410397831676026466279786567075569837905995849670457506509424137093\
                    86966105073759644626200845783961976687479804946160006586228159285618762293997847\
                    54374792644846972845709037139195462058553174757015203202626817494199067460188123\
                    43025594374083863097715974951329849978864273409720176255874977432080252739943546\
                    406857149724432737271924184396597489413743665435203185036",
                )
                .unwrap(),
            ),
            (
                "DELTA",
                BigNumber::from_dec(
                    "15200925076882677157789591684702017059623383056989770565868903056027181948730543\
                    99295800672330872600492191280089230823669310677995605202482818992762437858862818\
                    70840921937920485859048474384019970352393633470363708312200224554464807678075269\
                    30979439902956066177870277956875422590851200730884317152112566873283886794804628\
                    96595507615143450674441493558144131550575234736046528301295428957064044430974741\
                    23396811204866603563481670538809126409761180129194860387309361529269282552940366\
                    31715239230898556511907889484813751124436548299317858768444665139178324370349441\
                    645851840646275463995503285251979214896561204281531077329",
                )
                .unwrap(),
            ),
        ]),
        predicate(),
    )
}

pub fn c_hash() -> BigNumber {
    BigNumber::from_dec("36734255395875387097236654317906397277981258563238377220233648793005935253962")
        .unwrap()
}
